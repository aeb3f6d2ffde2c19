use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Directorios base de la aplicación.
///
/// `media_dir` es la raíz de medios que los handlers de borrado necesitan
/// para localizar los binarios huérfanos.
#[derive(Debug, Clone)]
pub struct FonotecaPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
  pub media_dir: PathBuf,
}

impl FonotecaPaths {
  pub fn new() -> Result<Self, ConfigError> {
    let (config_dir, data_dir, media_dir, base_dir);

    if let Ok(env_base) = std::env::var("FONOTECA_BASE_DIR") {
      let base = PathBuf::from(env_base);
      base_dir = base.clone();
      config_dir = base.join("config");
      data_dir = base.join("data");
      media_dir = base.join("media");
    } else {
      let proj_dirs =
        ProjectDirs::from("com", "fonoteca", "fonoteca").ok_or(ConfigError::Directories)?;
      base_dir = proj_dirs.config_dir().to_path_buf();
      config_dir = proj_dirs.config_dir().to_path_buf();
      data_dir = proj_dirs.data_dir().to_path_buf();
      media_dir = proj_dirs.data_dir().join("media");
    }

    std::fs::create_dir_all(&config_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    std::fs::create_dir_all(&media_dir)?;

    Ok(Self { base_dir, config_dir, data_dir, media_dir })
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("fonoteca.toml")
  }
}
