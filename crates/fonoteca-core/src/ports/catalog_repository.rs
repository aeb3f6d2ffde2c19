use std::time::Duration;

use crate::domain::album::{Album, NewAlbum};
use crate::domain::banda::{Banda, NewBanda};
use crate::domain::genero::{Genero, NewGenero};
use crate::domain::like::{Like, NewLike};
use crate::domain::musica::{Musica, NewMusica};
use crate::domain::token::Token;
use crate::domain::usuario::{NewUsuario, Usuario};
use crate::domain::{AlbumId, BandaId, GeneroId, LikeId, MusicaId, UsuarioId};
use crate::errors::CoreError;

/// Port de persistencia del catálogo.
///
/// El adapter es dueño de una única conexión a la base; el servicio lo recibe
/// por referencia. Todo es síncrono: cada reacción corre en línea con la
/// escritura que la dispara, sin coordinación propia más allá de la que dé la
/// base de datos.
///
/// Convenciones:
/// - `find_*` devuelve `Ok(None)` cuando la fila no existe.
/// - `delete_*` devuelve `CoreError::NotFound` si no borró nada.
/// - Violaciones de unicidad salen como `CoreError::Conflict`.
pub trait CatalogRepository {
  // -------- usuarios --------

  fn insert_usuario(&self, nuevo: &NewUsuario) -> Result<Usuario, CoreError>;
  fn find_usuario(&self, id: UsuarioId) -> Result<Option<Usuario>, CoreError>;
  fn find_usuario_por_email(&self, email: &str) -> Result<Option<Usuario>, CoreError>;
  fn list_usuarios(&self) -> Result<Vec<Usuario>, CoreError>;
  fn delete_usuario(&self, id: UsuarioId) -> Result<(), CoreError>;

  /// Update dirigido del flag de administrador (no pasa por el pipeline).
  fn set_usuario_admin(&self, id: UsuarioId, is_admin: bool) -> Result<(), CoreError>;

  // -------- generos --------

  fn insert_genero(&self, nuevo: &NewGenero) -> Result<Genero, CoreError>;
  fn find_genero(&self, id: GeneroId) -> Result<Option<Genero>, CoreError>;
  fn list_generos(&self) -> Result<Vec<Genero>, CoreError>;
  fn delete_genero(&self, id: GeneroId) -> Result<(), CoreError>;

  // -------- bandas --------

  fn insert_banda(&self, nueva: &NewBanda) -> Result<Banda, CoreError>;
  fn find_banda(&self, id: BandaId) -> Result<Option<Banda>, CoreError>;
  fn list_bandas(&self) -> Result<Vec<Banda>, CoreError>;
  fn bandas_de_genero(&self, genero_id: GeneroId) -> Result<Vec<Banda>, CoreError>;
  fn delete_banda(&self, id: BandaId) -> Result<(), CoreError>;

  // -------- albums --------

  fn insert_album(&self, nuevo: &NewAlbum) -> Result<Album, CoreError>;
  fn find_album(&self, id: AlbumId) -> Result<Option<Album>, CoreError>;
  fn list_albums(&self) -> Result<Vec<Album>, CoreError>;
  fn albums_de_banda(&self, banda_id: BandaId) -> Result<Vec<Album>, CoreError>;
  fn delete_album(&self, id: AlbumId) -> Result<(), CoreError>;

  // -------- musicas --------

  fn insert_musica(&self, nueva: &NewMusica) -> Result<Musica, CoreError>;
  fn find_musica(&self, id: MusicaId) -> Result<Option<Musica>, CoreError>;
  fn list_musicas(&self) -> Result<Vec<Musica>, CoreError>;
  fn musicas_de_album(&self, album_id: AlbumId) -> Result<Vec<Musica>, CoreError>;
  fn delete_musica(&self, id: MusicaId) -> Result<(), CoreError>;

  /// Update dirigido de la duración derivada, para no volver a disparar el
  /// pipeline de guardado completo.
  fn set_musica_duracao(&self, id: MusicaId, duracao: Duration) -> Result<(), CoreError>;

  // -------- likes --------

  fn insert_like(&self, nuevo: &NewLike) -> Result<Like, CoreError>;
  fn list_likes(&self) -> Result<Vec<Like>, CoreError>;
  fn likes_de_musica(&self, musica_id: MusicaId) -> Result<Vec<Like>, CoreError>;
  fn delete_like(&self, id: LikeId) -> Result<(), CoreError>;

  // -------- tokens --------

  fn insert_token(&self, token: &Token) -> Result<(), CoreError>;
  fn find_token_de_usuario(&self, usuario_id: UsuarioId) -> Result<Option<Token>, CoreError>;
}
