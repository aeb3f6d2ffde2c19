use thiserror::Error;

/// Error genérico del núcleo de Fonoteca.
///
/// Las capas superiores (CLI, API, etc.) deberían mapear este error
/// a mensajes de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("validation error: {0}")]
  Validation(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("repository error: {0}")]
  Repository(String),

  #[error("metadata error: {0}")]
  Metadata(String),

  #[error("asset error: {0}")]
  Asset(String),

  #[error("not found")]
  NotFound,
}
