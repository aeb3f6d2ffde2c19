use xxhash_rust::xxh3::xxh3_64;

/// Un archivo subido por el llamador: nombre original más contenido.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
  pub filename: String,
  pub bytes: Vec<u8>,
}

impl Upload {
  pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
    Upload { filename: filename.into(), bytes: bytes.into() }
  }

  /// Hash xxh3-64 del contenido, en hex de 16 caracteres.
  ///
  /// Forma parte de la ruta derivada: contenido idéntico cae en la misma
  /// ruta, contenido distinto bajo el mismo nombre humano no puede pisarse.
  pub fn content_hash(&self) -> String {
    format!("{:016x}", xxh3_64(&self.bytes))
  }
}

/// Limpia un componente de ruta derivado de datos humanos: fuera
/// separadores y secuencias de ascenso.
fn sanitize(componente: &str) -> String {
  let limpio: String = componente
    .trim()
    .chars()
    .map(|c| match c {
      '/' | '\\' | '\0' => '_',
      otro => otro,
    })
    .collect();

  limpio.replace("..", "_")
}

/// Ruta del avatar de un usuario: `images/usuarios/<nome>_<email>/<hash>_<archivo>`.
pub fn avatar_path(nome: &str, email: &str, upload: &Upload) -> String {
  format!(
    "images/usuarios/{}_{}/{}_{}",
    sanitize(nome),
    sanitize(email),
    upload.content_hash(),
    sanitize(&upload.filename)
  )
}

/// Ruta de la imagen de un género: `images/generos/<hash>_<archivo>`.
pub fn genero_imagem_path(upload: &Upload) -> String {
  format!("images/generos/{}_{}", upload.content_hash(), sanitize(&upload.filename))
}

/// Ruta de la imagen de una banda: `images/bandas/<hash>_<archivo>`.
pub fn banda_imagem_path(upload: &Upload) -> String {
  format!("images/bandas/{}_{}", upload.content_hash(), sanitize(&upload.filename))
}

/// Ruta de la carátula de un álbum: `images/capas/<hash>_<archivo>`.
pub fn capa_path(upload: &Upload) -> String {
  format!("images/capas/{}_{}", upload.content_hash(), sanitize(&upload.filename))
}

/// Ruta del audio de una pista: `musics/<banda>/<album>/<hash>_<archivo>`.
pub fn musica_path(banda: &str, album: &str, upload: &Upload) -> String {
  format!(
    "musics/{}/{}/{}_{}",
    sanitize(banda),
    sanitize(album),
    upload.content_hash(),
    sanitize(&upload.filename)
  )
}
