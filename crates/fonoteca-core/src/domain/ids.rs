use serde::{Deserialize, Serialize};
use std::fmt;

/// Los identificadores los asigna el almacén (rowid autoincremental),
/// por eso no hay constructor "aleatorio": solo `from_raw`.
macro_rules! define_id {
  ($(#[$doc:meta])* $name:ident) => {
    $(#[$doc])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub struct $name(i64);

    impl $name {
      /// Construye el id a partir del valor crudo de la base de datos.
      pub fn from_raw(raw: i64) -> Self {
        $name(raw)
      }

      /// Devuelve el valor interno.
      pub fn as_i64(&self) -> i64 {
        self.0
      }
    }

    impl From<i64> for $name {
      fn from(raw: i64) -> Self {
        $name(raw)
      }
    }

    impl From<$name> for i64 {
      fn from(id: $name) -> Self {
        id.0
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
      }
    }
  };
}

define_id!(
  /// Identificador de un usuario.
  UsuarioId
);

define_id!(
  /// Identificador de un género musical (raíz del árbol del catálogo).
  GeneroId
);

define_id!(
  /// Identificador de una banda.
  BandaId
);

define_id!(
  /// Identificador de un álbum.
  AlbumId
);

define_id!(
  /// Identificador de una pista (`Musica`).
  MusicaId
);

define_id!(
  /// Identificador de un like (Usuario × Musica).
  LikeId
);
