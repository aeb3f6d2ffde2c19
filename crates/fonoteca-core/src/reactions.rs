//! Etapas concretas del pipeline de `Musica`.
//!
//! El estado derivado avanza así: sin clasificar → clasificada
//! (`arquivo_tipo`) → con duración resuelta (`duracao`). No hay transición
//! hacia atrás.

use crate::domain::media_type::classify_extension;
use crate::domain::musica::{Musica, NewMusica};
use crate::errors::CoreError;
use crate::pipeline::{MusicaPatch, MusicaReaction, StageError, TagContext};
use crate::ports::{AssetStore, AudioProbe, TagSet};

/// Pre-persist: clasifica el archivo subido por su extensión y fija el MIME
/// en el borrador. Una extensión desconocida rechaza el guardado.
pub struct ClassifyArquivo;

impl MusicaReaction for ClassifyArquivo {
  fn name(&self) -> &'static str {
    "classify-arquivo"
  }

  fn before_save(&self, draft: &mut NewMusica) -> Result<(), StageError> {
    match classify_extension(&draft.arquivo) {
      Some(mime) => {
        draft.arquivo_tipo = Some(mime.to_string());
        Ok(())
      }
      None => Err(StageError::Fatal(CoreError::Validation(format!(
        "tipo de archivo no permitido: {}",
        draft.arquivo
      )))),
    }
  }
}

/// Post-persist: escribe los tags descriptivos dentro del archivo de audio.
///
/// Si el contenedor no admite tags, la etapa es blanda: se registra y el
/// guardado sigue adelante.
pub struct WriteTags<'a, P: AudioProbe, A: AssetStore> {
  probe: &'a P,
  assets: &'a A,
}

impl<'a, P: AudioProbe, A: AssetStore> WriteTags<'a, P, A> {
  pub fn new(probe: &'a P, assets: &'a A) -> Self {
    WriteTags { probe, assets }
  }
}

impl<P: AudioProbe, A: AssetStore> MusicaReaction for WriteTags<'_, P, A> {
  fn name(&self) -> &'static str {
    "write-tags"
  }

  fn after_save(&self, musica: &Musica, ctx: &TagContext) -> Result<MusicaPatch, StageError> {
    let tags = TagSet {
      album: ctx.album.clone(),
      artista: ctx.banda.clone(),
      genero: ctx.genero.clone(),
      titulo: musica.nome.clone(),
      faixa: musica.ordem,
    };

    let path = self.assets.absolute(&musica.arquivo);
    self.probe.write_tags(&path, &tags).map_err(|e| StageError::Soft(e.to_string()))?;

    Ok(MusicaPatch::default())
  }
}

/// Post-persist: sonda la duración de reproducción del archivo ya
/// clasificado y la devuelve como parche. Un archivo que no se deja sondar
/// queda sin duración (condición blanda), nunca tumba el guardado.
pub struct ResolveDuracao<'a, P: AudioProbe, A: AssetStore> {
  probe: &'a P,
  assets: &'a A,
}

impl<'a, P: AudioProbe, A: AssetStore> ResolveDuracao<'a, P, A> {
  pub fn new(probe: &'a P, assets: &'a A) -> Self {
    ResolveDuracao { probe, assets }
  }
}

impl<P: AudioProbe, A: AssetStore> MusicaReaction for ResolveDuracao<'_, P, A> {
  fn name(&self) -> &'static str {
    "resolve-duracao"
  }

  fn after_save(&self, musica: &Musica, _ctx: &TagContext) -> Result<MusicaPatch, StageError> {
    let Some(mime) = musica.arquivo_tipo.as_deref() else {
      // Sin clasificar no hay qué sondar; el invariante dice que a esta
      // altura el MIME ya debería estar fijado.
      return Err(StageError::Soft("musica sin arquivo_tipo".into()));
    };

    let path = self.assets.absolute(&musica.arquivo);
    let duracao =
      self.probe.probe_duracao(&path, mime).map_err(|e| StageError::Soft(e.to_string()))?;

    Ok(MusicaPatch { duracao: Some(duracao) })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{AlbumId, MusicaId};
  use crate::ports::{AssetError, ProbeError};
  use std::sync::RwLock;
  use std::path::{Path, PathBuf};
  use std::time::Duration;

  struct ProbeFalso {
    duracao: Duration,
    tags_fallan: bool,
    tags_escritos: RwLock<Vec<TagSet>>,
  }

  impl ProbeFalso {
    fn new(duracao: Duration) -> Self {
      ProbeFalso { duracao, tags_fallan: false, tags_escritos: RwLock::new(Vec::new()) }
    }
  }

  impl AudioProbe for ProbeFalso {
    fn write_tags(&self, _path: &Path, tags: &TagSet) -> Result<(), ProbeError> {
      if self.tags_fallan {
        return Err(ProbeError::Unsupported("sin contenedor de tags".into()));
      }
      self.tags_escritos.write().unwrap().push(tags.clone());
      Ok(())
    }

    fn probe_duracao(&self, _path: &Path, _mime: &str) -> Result<Duration, ProbeError> {
      Ok(self.duracao)
    }
  }

  struct AssetsFalsos;

  impl AssetStore for AssetsFalsos {
    fn store(&self, _rel: &str, _bytes: &[u8]) -> Result<(), AssetError> {
      Ok(())
    }

    fn remove(&self, _rel: &str) -> Result<(), AssetError> {
      Ok(())
    }

    fn absolute(&self, rel: &str) -> PathBuf {
      PathBuf::from("/media").join(rel)
    }

    fn exists(&self, _rel: &str) -> bool {
      true
    }
  }

  fn musica(mime: Option<&str>) -> Musica {
    Musica {
      id: MusicaId::from_raw(3),
      nome: "tema".into(),
      album_id: AlbumId::from_raw(1),
      ordem: Some(2),
      arquivo: "musics/b/a/x.mp3".into(),
      arquivo_tipo: mime.map(String::from),
      duracao: None,
    }
  }

  fn ctx() -> TagContext {
    TagContext { album: "Disco".into(), banda: "Grupo".into(), genero: "Rock".into() }
  }

  #[test]
  fn classify_fija_el_mime_en_el_borrador() {
    let mut draft = NewMusica {
      nome: "tema".into(),
      album_id: AlbumId::from_raw(1),
      ordem: None,
      arquivo: "musics/b/a/abc_x.mp3".into(),
      arquivo_tipo: None,
    };

    ClassifyArquivo.before_save(&mut draft).unwrap();

    assert_eq!(draft.arquivo_tipo.as_deref(), Some("audio/mpeg"));
  }

  #[test]
  fn classify_rechaza_extensiones_desconocidas() {
    let mut draft = NewMusica {
      nome: "tema".into(),
      album_id: AlbumId::from_raw(1),
      ordem: None,
      arquivo: "musics/b/a/abc_x.pdf".into(),
      arquivo_tipo: None,
    };

    let err = ClassifyArquivo.before_save(&mut draft).unwrap_err();

    assert!(matches!(err, StageError::Fatal(CoreError::Validation(_))));
    assert!(draft.arquivo_tipo.is_none());
  }

  #[test]
  fn write_tags_deriva_los_tags_de_la_cadena_de_padres() {
    let probe = ProbeFalso::new(Duration::from_secs(1));
    let assets = AssetsFalsos;
    let etapa = WriteTags::new(&probe, &assets);

    etapa.after_save(&musica(Some("audio/mpeg")), &ctx()).unwrap();

    let escritos = probe.tags_escritos.read().unwrap();
    assert_eq!(escritos.len(), 1);
    assert_eq!(escritos[0].album, "Disco");
    assert_eq!(escritos[0].artista, "Grupo");
    assert_eq!(escritos[0].genero, "Rock");
    assert_eq!(escritos[0].titulo, "tema");
    assert_eq!(escritos[0].faixa, Some(2));
  }

  #[test]
  fn write_tags_sin_contenedor_es_condicion_blanda() {
    let mut probe = ProbeFalso::new(Duration::from_secs(1));
    probe.tags_fallan = true;
    let assets = AssetsFalsos;
    let etapa = WriteTags::new(&probe, &assets);

    let err = etapa.after_save(&musica(Some("audio/mpeg")), &ctx()).unwrap_err();

    assert!(matches!(err, StageError::Soft(_)));
  }

  #[test]
  fn resolve_duracao_emite_el_parche() {
    let probe = ProbeFalso::new(Duration::from_secs(184));
    let assets = AssetsFalsos;
    let etapa = ResolveDuracao::new(&probe, &assets);

    let patch = etapa.after_save(&musica(Some("audio/mpeg")), &ctx()).unwrap();

    assert_eq!(patch.duracao, Some(Duration::from_secs(184)));
  }

  #[test]
  fn resolve_duracao_sin_mime_es_condicion_blanda() {
    let probe = ProbeFalso::new(Duration::from_secs(184));
    let assets = AssetsFalsos;
    let etapa = ResolveDuracao::new(&probe, &assets);

    let err = etapa.after_save(&musica(None), &ctx()).unwrap_err();

    assert!(matches!(err, StageError::Soft(_)));
  }
}
