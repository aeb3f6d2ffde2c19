use std::path::Path;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
  #[error("io error: {0}")]
  Io(String),

  #[error("unsupported container: {0}")]
  Unsupported(String),

  #[error("corrupt metadata: {0}")]
  Corrupt(String),
}

/// Tags descriptivos que se escriben dentro del archivo de audio,
/// derivados de la cadena Album → Banda → Genero.
#[derive(Debug, Clone, PartialEq)]
pub struct TagSet {
  pub album: String,
  pub artista: String,
  pub genero: String,
  pub titulo: String,
  pub faixa: Option<u32>,
}

/// Port que abstrae el acceso a los metadatos técnicos del audio.
///
/// Implementaciones posibles: lofty, symphonia, ffmpeg. Las operaciones son
/// bloqueantes y se ejecutan en línea con el guardado.
pub trait AudioProbe: Send + Sync {
  /// Escribe los tags en el archivo. El pipeline trata el fallo como
  /// condición blanda: se registra y el guardado sigue.
  fn write_tags(&self, path: &Path, tags: &TagSet) -> Result<(), ProbeError>;

  /// Sonda la duración de reproducción del archivo ya clasificado.
  fn probe_duracao(&self, path: &Path, mime: &str) -> Result<Duration, ProbeError>;
}
