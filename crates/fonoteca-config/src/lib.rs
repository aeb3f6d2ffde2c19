mod backend;
mod model;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use model::MediaConfig;
pub use paths::{ConfigError, FonotecaPaths};

use once_cell::sync::Lazy;

// Singleton de paths (portable / system)
pub static PATHS: Lazy<FonotecaPaths> =
  Lazy::new(|| FonotecaPaths::detect().expect("failed to init FonotecaPaths"));

// Singleton del backend de config
pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> =
  Lazy::new(|| TomlConfigBackend::new(PATHS.clone()));
