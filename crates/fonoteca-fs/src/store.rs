use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::warn;

use fonoteca_core::ports::{AssetError, AssetStore};

use crate::io::atomic_write_bytes;

/// Almacén de binarios sobre un directorio de medios local.
///
/// Las rutas relativas vienen ya derivadas por el dominio; aquí solo se
/// confinan al directorio raíz y se escriben/borran de forma tolerante.
pub struct MediaStore {
  media_root: PathBuf,
}

impl MediaStore {
  pub fn new(media_root: impl Into<PathBuf>) -> Self {
    MediaStore { media_root: media_root.into() }
  }

  pub fn media_root(&self) -> &Path {
    &self.media_root
  }

  /// Resuelve la ruta relativa rechazando ascensos y rutas absolutas.
  fn checked(&self, rel: &str) -> Result<PathBuf, AssetError> {
    let rel_path = Path::new(rel);

    let escapa = rel_path
      .components()
      .any(|c| !matches!(c, Component::Normal(_)));

    if rel.is_empty() || escapa {
      return Err(AssetError::InvalidPath(rel.to_string()));
    }

    Ok(self.media_root.join(rel_path))
  }
}

impl AssetStore for MediaStore {
  fn store(&self, rel: &str, bytes: &[u8]) -> Result<(), AssetError> {
    let destino = self.checked(rel)?;

    if let Some(padre) = destino.parent() {
      fs::create_dir_all(padre).map_err(|e| AssetError::Io(e.to_string()))?;
    }

    atomic_write_bytes(&destino, bytes).map_err(|e| AssetError::Io(e.to_string()))
  }

  fn remove(&self, rel: &str) -> Result<(), AssetError> {
    let destino = self.checked(rel)?;

    match fs::remove_file(&destino) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == ErrorKind::NotFound => {
        warn!(archivo = %destino.display(), "archivo no encontrado al borrar, se ignora");
        Ok(())
      }
      Err(e) => Err(AssetError::Io(e.to_string())),
    }
  }

  fn absolute(&self, rel: &str) -> PathBuf {
    self.media_root.join(rel)
  }

  fn exists(&self, rel: &str) -> bool {
    self.absolute(rel).is_file()
  }
}
