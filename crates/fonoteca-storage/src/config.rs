use fonoteca_config::{CONFIG_BACKEND, ConfigBackend, ConfigError};
use serde::{Deserialize, Serialize};

/// Sección `[storage]` de fonoteca.toml.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
  /// Nombre del archivo de base de datos dentro de `data_dir`.
  #[serde(default = "default_db_filename")]
  pub db_filename: String,

  /// Journal mode de SQLite (p. ej. `WAL`). `None` deja el default.
  pub journal_mode: Option<String>,
}

fn default_db_filename() -> String {
  "fonoteca.db".to_string()
}

impl Default for StorageConfig {
  fn default() -> Self {
    StorageConfig { db_filename: default_db_filename(), journal_mode: None }
  }
}

impl StorageConfig {
  /// Carga la sección con defaults y la deja persistida para que el archivo
  /// quede autodocumentado.
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("storage")?;
    CONFIG_BACKEND.save_section("storage", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("storage", self)
  }
}
