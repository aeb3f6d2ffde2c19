//! Pipeline de estado derivado de `Musica`.
//!
//! Sustituye al registro ambiental de señales del sistema original por una
//! secuencia explícita y ordenada de etapas con nombre, invocada de forma
//! síncrona por el servicio alrededor del persist. Las etapas son valores
//! inyectados, no registros globales, así que se prueban en aislamiento.

use std::time::Duration;

use tracing::warn;

use crate::domain::musica::{Musica, NewMusica};
use crate::errors::CoreError;

/// Resultado de una etapa.
///
/// `Fatal` aborta la escritura que disparó el pipeline; `Soft` se registra
/// con el nombre de la etapa y se sigue adelante. No hay nivel intermedio de
/// reintento.
#[derive(Debug)]
pub enum StageError {
  Fatal(CoreError),
  Soft(String),
}

/// Cambios que una etapa post-persist quiere aplicar a la fila ya guardada.
/// El servicio los persiste con updates dirigidos, de modo que el pipeline
/// no se re-dispara a sí mismo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MusicaPatch {
  pub duracao: Option<Duration>,
}

/// Contexto resuelto de la cadena Album → Banda → Genero, para las etapas
/// que necesitan los nombres de los padres.
#[derive(Debug, Clone)]
pub struct TagContext {
  pub album: String,
  pub banda: String,
  pub genero: String,
}

/// Una reacción del ciclo de vida de `Musica`.
///
/// `before_save` ve el borrador mutable (estado "antes"); `after_save` ve la
/// fila persistida (estado "después") y devuelve un parche opcional.
pub trait MusicaReaction {
  fn name(&self) -> &'static str;

  fn before_save(&self, _draft: &mut NewMusica) -> Result<(), StageError> {
    Ok(())
  }

  fn after_save(&self, _musica: &Musica, _ctx: &TagContext) -> Result<MusicaPatch, StageError> {
    Ok(MusicaPatch::default())
  }
}

/// Secuencia ordenada de reacciones.
pub struct MusicaPipeline<'a> {
  stages: Vec<Box<dyn MusicaReaction + 'a>>,
}

impl<'a> MusicaPipeline<'a> {
  pub fn new(stages: Vec<Box<dyn MusicaReaction + 'a>>) -> Self {
    MusicaPipeline { stages }
  }

  /// Corre las etapas pre-persist en orden sobre el borrador.
  pub fn run_before_save(&self, draft: &mut NewMusica) -> Result<(), CoreError> {
    for stage in &self.stages {
      match stage.before_save(draft) {
        Ok(()) => {}
        Err(StageError::Fatal(e)) => return Err(e),
        Err(StageError::Soft(motivo)) => {
          warn!(etapa = stage.name(), %motivo, "etapa pre-persist omitida");
        }
      }
    }

    Ok(())
  }

  /// Corre las etapas post-persist en orden y acumula sus parches.
  pub fn run_after_save(&self, musica: &Musica, ctx: &TagContext) -> Result<MusicaPatch, CoreError> {
    let mut acumulado = MusicaPatch::default();

    for stage in &self.stages {
      match stage.after_save(musica, ctx) {
        Ok(patch) => {
          if patch.duracao.is_some() {
            acumulado.duracao = patch.duracao;
          }
        }
        Err(StageError::Fatal(e)) => return Err(e),
        Err(StageError::Soft(motivo)) => {
          warn!(etapa = stage.name(), %motivo, "etapa post-persist omitida");
        }
      }
    }

    Ok(acumulado)
  }
}
