use crate::domain::ids::UsuarioId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token de acceso asociado uno-a-uno con un usuario.
///
/// Se acuña exactamente una vez, en el primer persist del usuario;
/// las actualizaciones no generan tokens nuevos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
  /// Clave opaca del token.
  pub chave: String,
  pub usuario_id: UsuarioId,
}

impl Token {
  /// Acuña un token nuevo para el usuario dado.
  pub fn mint(usuario_id: UsuarioId) -> Self {
    Token { chave: Uuid::new_v4().simple().to_string(), usuario_id }
  }
}
