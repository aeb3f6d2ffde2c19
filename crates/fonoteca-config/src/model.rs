use crate::{CONFIG_BACKEND, ConfigBackend, ConfigError, PATHS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sección `[media]` de fonoteca.toml.
///
/// Los adapters declaran sus propias secciones sobre el mismo backend
/// (p. ej. `[storage]` vive en el crate de almacenamiento).
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MediaConfig {
  /// Raíz de medios; `None` usa el `media_dir` detectado por los paths.
  pub media_dir: Option<PathBuf>,
}

impl MediaConfig {
  /// Carga la sección con defaults y la deja persistida para que el archivo
  /// quede autodocumentado.
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("media")?;
    CONFIG_BACKEND.save_section("media", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("media", self)
  }

  /// Raíz de medios efectiva: la configurada o la detectada.
  pub fn media_root(&self) -> PathBuf {
    self.media_dir.clone().unwrap_or_else(|| PATHS.media_dir.clone())
  }
}
