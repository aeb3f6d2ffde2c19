use crate::domain::ids::GeneroId;
use crate::domain::upload::Upload;
use serde::{Deserialize, Serialize};

/// Género musical: raíz del árbol Genero → Banda → Album → Musica.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genero {
  pub id: GeneroId,
  /// Descripción única del género.
  pub descricao: String,
  /// Ruta relativa de la imagen dentro del directorio de medios.
  pub imagem: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewGenero {
  pub descricao: String,
  pub imagem: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateGenero {
  pub descricao: String,
  pub imagem: Option<Upload>,
}
