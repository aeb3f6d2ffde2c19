use crate::domain::ids::UsuarioId;
use crate::domain::upload::Upload;
use serde::{Deserialize, Serialize};

/// Un usuario del catálogo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
  pub id: UsuarioId,
  /// E-mail normalizado; clave única de acceso.
  pub email: String,
  pub nome: String,
  pub sobrenome: String,
  /// Hash de la contraseña en formato `sha256$<salt>$<hex>`.
  pub password_hash: String,
  /// Ruta relativa del avatar dentro del directorio de medios.
  pub avatar: Option<String>,
  pub is_active: bool,
  pub is_admin: bool,
}

/// Borrador listo para persistir: la contraseña ya viene hasheada y el
/// avatar ya fue escrito en el almacén de medios.
#[derive(Debug, Clone)]
pub struct NewUsuario {
  pub email: String,
  pub nome: String,
  pub sobrenome: String,
  pub password_hash: String,
  pub avatar: Option<String>,
  pub is_active: bool,
  pub is_admin: bool,
}

/// Entrada de la fábrica de usuarios (contraseña en claro, avatar en bytes).
#[derive(Debug, Clone)]
pub struct CreateUsuario {
  pub email: String,
  pub nome: String,
  pub sobrenome: String,
  pub password: String,
  pub avatar: Option<Upload>,
}
