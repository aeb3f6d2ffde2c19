use crate::domain::ids::{LikeId, MusicaId, UsuarioId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Un "me gusta" de un usuario sobre una pista.
///
/// Cae en cascada con el usuario y con la pista.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
  pub id: LikeId,
  /// Momento de creación (lo fija el servicio, no el llamador).
  pub data: DateTime<Utc>,
  pub usuario_id: UsuarioId,
  pub musica_id: MusicaId,
}

#[derive(Debug, Clone)]
pub struct NewLike {
  pub data: DateTime<Utc>,
  pub usuario_id: UsuarioId,
  pub musica_id: MusicaId,
}
