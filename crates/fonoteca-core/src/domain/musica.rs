use crate::domain::ids::{AlbumId, MusicaId};
use crate::domain::upload::Upload;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Una pista del catálogo.
///
/// `arquivo_tipo` y `duracao` son estado derivado: los fija el pipeline de
/// reacciones a partir del archivo subido, nunca el llamador. El estado solo
/// avanza: sin clasificar → clasificada → con duración resuelta; re-subir el
/// archivo vuelve a entrar al pipeline desde el principio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Musica {
  pub id: MusicaId,
  pub nome: String,
  pub album_id: AlbumId,
  /// Posición dentro del álbum.
  pub ordem: Option<u32>,
  /// Ruta relativa del audio dentro del directorio de medios.
  pub arquivo: String,
  /// MIME derivado de la extensión del archivo (p. ej. `audio/mpeg`).
  pub arquivo_tipo: Option<String>,
  /// Duración de reproducción, sondada del propio archivo.
  pub duracao: Option<Duration>,
}

/// Borrador listo para persistir. `arquivo_tipo` arranca en `None` y lo
/// rellena la etapa de clasificación antes del insert; `duracao` nunca viaja
/// en el borrador, se aplica después con un update dirigido.
#[derive(Debug, Clone)]
pub struct NewMusica {
  pub nome: String,
  pub album_id: AlbumId,
  pub ordem: Option<u32>,
  pub arquivo: String,
  pub arquivo_tipo: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateMusica {
  pub nome: String,
  pub album_id: AlbumId,
  pub ordem: Option<u32>,
  pub arquivo: Upload,
}
