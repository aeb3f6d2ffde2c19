use std::path::Path;

/// Extensiones de audio reconocidas y su MIME.
const AUDIO_TYPES: &[(&str, &str)] = &[
  ("mp3", "audio/mpeg"),
  ("wav", "audio/wav"),
  ("flac", "audio/flac"),
  ("ogg", "audio/ogg"),
];

/// Clasifica un nombre de archivo por su extensión.
///
/// Devuelve `None` si la extensión no está en la tabla; el pipeline trata
/// ese caso como rechazo del guardado.
pub fn classify_extension(filename: &str) -> Option<&'static str> {
  let ext = Path::new(filename).extension()?.to_str()?.to_lowercase();

  AUDIO_TYPES.iter().find(|(e, _)| *e == ext).map(|(_, mime)| *mime)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn clasifica_extensiones_conocidas() {
    assert_eq!(classify_extension("cancion.mp3"), Some("audio/mpeg"));
    assert_eq!(classify_extension("cancion.wav"), Some("audio/wav"));
    assert_eq!(classify_extension("cancion.flac"), Some("audio/flac"));
    assert_eq!(classify_extension("cancion.ogg"), Some("audio/ogg"));
  }

  #[test]
  fn la_extension_no_distingue_mayusculas() {
    assert_eq!(classify_extension("CANCION.MP3"), Some("audio/mpeg"));
  }

  #[test]
  fn rechaza_extensiones_desconocidas() {
    assert_eq!(classify_extension("cancion.exe"), None);
    assert_eq!(classify_extension("cancion.m4a"), None);
    assert_eq!(classify_extension("sin_extension"), None);
  }
}
