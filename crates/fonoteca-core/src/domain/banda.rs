use crate::domain::ids::{BandaId, GeneroId};
use crate::domain::upload::Upload;
use serde::{Deserialize, Serialize};

/// Una banda pertenece exactamente a un género.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banda {
  pub id: BandaId,
  /// Nombre único de la banda.
  pub nome: String,
  pub genero_id: GeneroId,
  pub imagem: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewBanda {
  pub nome: String,
  pub genero_id: GeneroId,
  pub imagem: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateBanda {
  pub nome: String,
  pub genero_id: GeneroId,
  pub imagem: Option<Upload>,
}
