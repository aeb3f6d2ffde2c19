use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
  #[error("io error: {0}")]
  Io(String),

  #[error("invalid asset path: {0}")]
  InvalidPath(String),
}

/// Port del almacén de binarios (avatares, imágenes, carátulas, audio).
///
/// Las rutas son relativas al directorio de medios. El almacén no borra nada
/// por su cuenta: la limpieza de huérfanos la ordena el servicio al eliminar
/// la fila dueña.
pub trait AssetStore: Send + Sync {
  /// Escribe el contenido en la ruta relativa, creando directorios padre.
  fn store(&self, rel: &str, bytes: &[u8]) -> Result<(), AssetError>;

  /// Elimina el archivo. Que ya no exista no es un error: se registra y
  /// se devuelve `Ok`.
  fn remove(&self, rel: &str) -> Result<(), AssetError>;

  /// Resuelve la ruta absoluta dentro del directorio de medios.
  fn absolute(&self, rel: &str) -> PathBuf;

  fn exists(&self, rel: &str) -> bool;
}
