use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Escritura atómica: archivo temporal + rename, con sync antes del rename
/// para no dejar un asset a medias si el proceso muere.
pub fn atomic_write_bytes(path: &Path, contents: &[u8]) -> io::Result<()> {
  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents)?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  Ok(())
}

pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  atomic_write_bytes(path, contents.as_bytes())
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn escribe_y_no_deja_temporal() {
    let tmp = tempdir().unwrap();
    let destino = tmp.path().join("asset.bin");

    atomic_write_bytes(&destino, b"contenido").unwrap();

    assert_eq!(fs::read(&destino).unwrap(), b"contenido");
    assert!(!destino.with_extension("tmp").exists());
  }

  #[test]
  fn sobrescribe_contenido_existente() {
    let tmp = tempdir().unwrap();
    let destino = tmp.path().join("asset.bin");

    atomic_write_bytes(&destino, b"v1").unwrap();
    atomic_write_bytes(&destino, b"v2").unwrap();

    assert_eq!(fs::read(&destino).unwrap(), b"v2");
  }
}
