//! Adapter de lofty para el port `AudioProbe`.
//!
//! Escribe los tags descriptivos dentro del archivo y sonda la duración de
//! reproducción desde las propiedades técnicas del contenedor.

use std::path::Path;
use std::time::Duration;

use lofty::config::WriteOptions;
use lofty::file::{AudioFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::{Accessor, Tag, TagExt};
use tracing::debug;

use fonoteca_core::ports::{AudioProbe, ProbeError, TagSet};

pub struct LoftyProbe;

impl LoftyProbe {
  pub fn new() -> Self {
    LoftyProbe
  }
}

impl Default for LoftyProbe {
  fn default() -> Self {
    LoftyProbe::new()
  }
}

impl AudioProbe for LoftyProbe {
  fn write_tags(&self, path: &Path, tags: &TagSet) -> Result<(), ProbeError> {
    let mut tagged = Probe::open(path)
      .map_err(|e| ProbeError::Io(e.to_string()))?
      .read()
      .map_err(|e| ProbeError::Unsupported(e.to_string()))?;

    // Sin contenedor de tags se crea uno del tipo primario del formato.
    if tagged.primary_tag_mut().is_none() {
      let tipo = tagged.primary_tag_type();
      tagged.insert_tag(Tag::new(tipo));
    }

    let tag = tagged
      .primary_tag_mut()
      .ok_or_else(|| ProbeError::Unsupported("el formato no admite tags".to_string()))?;

    tag.set_album(tags.album.clone());
    tag.set_artist(tags.artista.clone());
    tag.set_genre(tags.genero.clone());
    tag.set_title(tags.titulo.clone());
    if let Some(faixa) = tags.faixa {
      tag.set_track(faixa);
    }

    tag
      .save_to_path(path, WriteOptions::default())
      .map_err(|e| ProbeError::Corrupt(e.to_string()))?;

    debug!(archivo = %path.display(), "tags escritos");
    Ok(())
  }

  fn probe_duracao(&self, path: &Path, mime: &str) -> Result<Duration, ProbeError> {
    let tagged = Probe::open(path)
      .map_err(|e| ProbeError::Io(e.to_string()))?
      .read()
      .map_err(|e| ProbeError::Unsupported(e.to_string()))?;

    let duracao = tagged.properties().duration();
    debug!(archivo = %path.display(), %mime, ?duracao, "duración sondada");

    Ok(duracao)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  /// WAV PCM mínimo: 16 bits, mono, 8 kHz. `segundos` de silencio.
  fn wav_pcm(segundos: u32) -> Vec<u8> {
    const SAMPLE_RATE: u32 = 8_000;
    const BLOCK_ALIGN: u16 = 2; // mono * 16 bits
    let data_len = segundos * SAMPLE_RATE * BLOCK_ALIGN as u32;

    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&(SAMPLE_RATE * BLOCK_ALIGN as u32).to_le_bytes());
    bytes.extend_from_slice(&BLOCK_ALIGN.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(44 + data_len as usize, 0);

    bytes
  }

  fn tags_de_prueba() -> TagSet {
    TagSet {
      album: "Disco".into(),
      artista: "Grupo".into(),
      genero: "Rock".into(),
      titulo: "Tema".into(),
      faixa: Some(3),
    }
  }

  #[test]
  fn sonda_la_duracion_de_un_wav_generado() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("silencio.wav");
    fs::write(&path, wav_pcm(2)).unwrap();

    let duracao = LoftyProbe::new().probe_duracao(&path, "audio/wav").unwrap();

    assert_eq!(duracao.as_secs(), 2);
  }

  #[test]
  fn escribe_y_relee_los_tags() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("tema.wav");
    fs::write(&path, wav_pcm(1)).unwrap();
    let probe = LoftyProbe::new();

    probe.write_tags(&path, &tags_de_prueba()).unwrap();

    let tagged = Probe::open(&path).unwrap().read().unwrap();
    let tag = tagged.primary_tag().expect("debería haber un tag");
    assert_eq!(tag.title().as_deref(), Some("Tema"));
    assert_eq!(tag.artist().as_deref(), Some("Grupo"));
    assert_eq!(tag.album().as_deref(), Some("Disco"));
  }

  #[test]
  fn escribir_tags_conserva_la_duracion() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("tema.wav");
    fs::write(&path, wav_pcm(3)).unwrap();
    let probe = LoftyProbe::new();

    probe.write_tags(&path, &tags_de_prueba()).unwrap();

    assert_eq!(probe.probe_duracao(&path, "audio/wav").unwrap().as_secs(), 3);
  }

  #[test]
  fn un_archivo_que_no_es_audio_falla() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("basura.mp3");
    fs::write(&path, b"esto no es un mp3").unwrap();

    assert!(LoftyProbe::new().write_tags(&path, &tags_de_prueba()).is_err());
  }

  #[test]
  fn un_archivo_inexistente_es_error_de_io() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("no_existe.wav");

    let err = LoftyProbe::new().probe_duracao(&path, "audio/wav").unwrap_err();

    assert!(matches!(err, ProbeError::Io(_)));
  }
}
