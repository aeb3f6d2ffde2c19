use crate::domain::ids::{AlbumId, BandaId};
use crate::domain::upload::Upload;
use serde::{Deserialize, Serialize};

/// Un álbum pertenece exactamente a una banda. La carátula es obligatoria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
  pub id: AlbumId,
  pub nome: String,
  pub banda_id: BandaId,
  /// Año de lanzamiento (entero positivo).
  pub data_lancamento: i32,
  /// Ruta relativa de la carátula dentro del directorio de medios.
  pub capa: String,
}

#[derive(Debug, Clone)]
pub struct NewAlbum {
  pub nome: String,
  pub banda_id: BandaId,
  pub data_lancamento: i32,
  pub capa: String,
}

#[derive(Debug, Clone)]
pub struct CreateAlbum {
  pub nome: String,
  pub banda_id: BandaId,
  pub data_lancamento: i32,
  pub capa: Upload,
}
