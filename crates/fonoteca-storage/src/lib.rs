pub mod config;
pub mod models;
pub mod schema;

use std::cell::RefCell;
use std::time::Duration;

use chrono::{DateTime, Utc};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use fonoteca_core::CoreError;
use fonoteca_core::domain::album::{Album, NewAlbum};
use fonoteca_core::domain::banda::{Banda, NewBanda};
use fonoteca_core::domain::genero::{Genero, NewGenero};
use fonoteca_core::domain::like::{Like, NewLike};
use fonoteca_core::domain::musica::{Musica, NewMusica};
use fonoteca_core::domain::token::Token;
use fonoteca_core::domain::usuario::{NewUsuario, Usuario};
use fonoteca_core::domain::{AlbumId, BandaId, GeneroId, LikeId, MusicaId, UsuarioId};
use fonoteca_core::ports::CatalogRepository;

use crate::models::{
  AlbumRow, BandaRow, GeneroRow, LikeRow, MusicaRow, NewAlbumRow, NewBandaRow, NewGeneroRow,
  NewLikeRow, NewMusicaRow, NewUsuarioRow, TokenRow, UsuarioRow,
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Modos de journal que aceptamos en el PRAGMA; no se puede ligar como
/// parámetro, así que la lista cerrada hace de saneamiento.
const JOURNAL_MODES: &[&str] = &["delete", "truncate", "persist", "memory", "wal", "off"];

/// Adapter SQLite del catálogo.
///
/// Es dueño de una única conexión; el servicio lo usa por referencia y todo
/// corre en línea, sin pool ni workers.
pub struct SqliteCatalogRepository {
  conn: RefCell<SqliteConnection>,
}

impl SqliteCatalogRepository {
  /// Abre (o crea) la base, activa las claves foráneas y aplica las
  /// migraciones pendientes.
  pub fn new(database_url: &str) -> Result<Self, CoreError> {
    let mut conn = SqliteConnection::establish(database_url)
      .map_err(|e| CoreError::Repository(e.to_string()))?;

    conn
      .batch_execute("PRAGMA foreign_keys = ON;")
      .map_err(|e| CoreError::Repository(e.to_string()))?;

    let aplicadas = conn
      .run_pending_migrations(MIGRATIONS)
      .map_err(|e| CoreError::Repository(e.to_string()))?;

    if !aplicadas.is_empty() {
      tracing::info!(migraciones = aplicadas.len(), "esquema del catálogo actualizado");
    }

    Ok(Self { conn: RefCell::new(conn) })
  }

  /// Cambia el journal mode de SQLite (p. ej. `WAL`).
  pub fn set_journal_mode(&self, mode: &str) -> Result<(), CoreError> {
    let mode = mode.to_ascii_lowercase();
    if !JOURNAL_MODES.contains(&mode.as_str()) {
      return Err(CoreError::Validation(format!("journal mode desconocido: {mode}")));
    }

    self
      .conn
      .borrow_mut()
      .batch_execute(&format!("PRAGMA journal_mode = {mode};"))
      .map_err(|e| CoreError::Repository(e.to_string()))
  }
}

fn map_db_err(e: DieselError) -> CoreError {
  match e {
    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
      CoreError::Conflict(info.message().to_string())
    }
    DieselError::NotFound => CoreError::NotFound,
    other => CoreError::Repository(other.to_string()),
  }
}

// -------- conversiones fila ↔ dominio --------

fn usuario_to_new_row(nuevo: &NewUsuario) -> NewUsuarioRow {
  NewUsuarioRow {
    email: nuevo.email.clone(),
    nome: nuevo.nome.clone(),
    sobrenome: nuevo.sobrenome.clone(),
    password_hash: nuevo.password_hash.clone(),
    avatar: nuevo.avatar.clone(),
    is_active: nuevo.is_active,
    is_admin: nuevo.is_admin,
  }
}

fn row_to_usuario(row: UsuarioRow) -> Usuario {
  Usuario {
    id: UsuarioId::from_raw(row.id),
    email: row.email,
    nome: row.nome,
    sobrenome: row.sobrenome,
    password_hash: row.password_hash,
    avatar: row.avatar,
    is_active: row.is_active,
    is_admin: row.is_admin,
  }
}

fn genero_to_new_row(nuevo: &NewGenero) -> NewGeneroRow {
  NewGeneroRow { descricao: nuevo.descricao.clone(), imagem: nuevo.imagem.clone() }
}

fn row_to_genero(row: GeneroRow) -> Genero {
  Genero { id: GeneroId::from_raw(row.id), descricao: row.descricao, imagem: row.imagem }
}

fn banda_to_new_row(nueva: &NewBanda) -> NewBandaRow {
  NewBandaRow {
    nome: nueva.nome.clone(),
    genero_id: nueva.genero_id.as_i64(),
    imagem: nueva.imagem.clone(),
  }
}

fn row_to_banda(row: BandaRow) -> Banda {
  Banda {
    id: BandaId::from_raw(row.id),
    nome: row.nome,
    genero_id: GeneroId::from_raw(row.genero_id),
    imagem: row.imagem,
  }
}

fn album_to_new_row(nuevo: &NewAlbum) -> NewAlbumRow {
  NewAlbumRow {
    nome: nuevo.nome.clone(),
    banda_id: nuevo.banda_id.as_i64(),
    data_lancamento: nuevo.data_lancamento,
    capa: nuevo.capa.clone(),
  }
}

fn row_to_album(row: AlbumRow) -> Album {
  Album {
    id: AlbumId::from_raw(row.id),
    nome: row.nome,
    banda_id: BandaId::from_raw(row.banda_id),
    data_lancamento: row.data_lancamento,
    capa: row.capa,
  }
}

fn musica_to_new_row(nueva: &NewMusica) -> NewMusicaRow {
  NewMusicaRow {
    nome: nueva.nome.clone(),
    album_id: nueva.album_id.as_i64(),
    ordem: nueva.ordem.map(|o| o as i32),
    arquivo: nueva.arquivo.clone(),
    arquivo_tipo: nueva.arquivo_tipo.clone(),
  }
}

fn row_to_musica(row: MusicaRow) -> Musica {
  Musica {
    id: MusicaId::from_raw(row.id),
    nome: row.nome,
    album_id: AlbumId::from_raw(row.album_id),
    ordem: row.ordem.map(|o| o as u32),
    arquivo: row.arquivo,
    arquivo_tipo: row.arquivo_tipo,
    duracao: row.duracao_ms.map(|ms| Duration::from_millis(ms as u64)),
  }
}

fn like_to_new_row(nuevo: &NewLike) -> NewLikeRow {
  NewLikeRow {
    data: nuevo.data.to_rfc3339(),
    usuario_id: nuevo.usuario_id.as_i64(),
    musica_id: nuevo.musica_id.as_i64(),
  }
}

// Los timestamps viajan como texto RFC 3339; un valor ilegible en la base
// es corrupción, no un caso de dominio.
fn row_to_like(row: LikeRow) -> Result<Like, CoreError> {
  let data = DateTime::parse_from_rfc3339(&row.data)
    .map_err(|e| CoreError::Repository(format!("timestamp inválido en likes: {e}")))?
    .with_timezone(&Utc);

  Ok(Like {
    id: LikeId::from_raw(row.id),
    data,
    usuario_id: UsuarioId::from_raw(row.usuario_id),
    musica_id: MusicaId::from_raw(row.musica_id),
  })
}

impl CatalogRepository for SqliteCatalogRepository {
  // -------- usuarios --------

  fn insert_usuario(&self, nuevo: &NewUsuario) -> Result<Usuario, CoreError> {
    use crate::schema::usuarios::dsl::*;

    let row: UsuarioRow = diesel::insert_into(usuarios)
      .values(usuario_to_new_row(nuevo))
      .get_result(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    Ok(row_to_usuario(row))
  }

  fn find_usuario(&self, usuario: UsuarioId) -> Result<Option<Usuario>, CoreError> {
    use crate::schema::usuarios::dsl::*;

    let row_opt = usuarios
      .filter(id.eq(usuario.as_i64()))
      .first::<UsuarioRow>(&mut *self.conn.borrow_mut())
      .optional()
      .map_err(map_db_err)?;

    Ok(row_opt.map(row_to_usuario))
  }

  fn find_usuario_por_email(&self, valor: &str) -> Result<Option<Usuario>, CoreError> {
    use crate::schema::usuarios::dsl::*;

    let row_opt = usuarios
      .filter(email.eq(valor))
      .first::<UsuarioRow>(&mut *self.conn.borrow_mut())
      .optional()
      .map_err(map_db_err)?;

    Ok(row_opt.map(row_to_usuario))
  }

  fn list_usuarios(&self) -> Result<Vec<Usuario>, CoreError> {
    use crate::schema::usuarios::dsl::*;

    let rows = usuarios
      .order(email.asc())
      .load::<UsuarioRow>(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    Ok(rows.into_iter().map(row_to_usuario).collect())
  }

  fn delete_usuario(&self, usuario: UsuarioId) -> Result<(), CoreError> {
    use crate::schema::usuarios::dsl::*;

    let borradas = diesel::delete(usuarios.filter(id.eq(usuario.as_i64())))
      .execute(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    if borradas == 0 { Err(CoreError::NotFound) } else { Ok(()) }
  }

  fn set_usuario_admin(&self, usuario: UsuarioId, flag: bool) -> Result<(), CoreError> {
    use crate::schema::usuarios::dsl::*;

    let tocadas = diesel::update(usuarios.filter(id.eq(usuario.as_i64())))
      .set(is_admin.eq(flag))
      .execute(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    if tocadas == 0 { Err(CoreError::NotFound) } else { Ok(()) }
  }

  // -------- generos --------

  fn insert_genero(&self, nuevo: &NewGenero) -> Result<Genero, CoreError> {
    use crate::schema::generos::dsl::*;

    let row: GeneroRow = diesel::insert_into(generos)
      .values(genero_to_new_row(nuevo))
      .get_result(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    Ok(row_to_genero(row))
  }

  fn find_genero(&self, genero: GeneroId) -> Result<Option<Genero>, CoreError> {
    use crate::schema::generos::dsl::*;

    let row_opt = generos
      .filter(id.eq(genero.as_i64()))
      .first::<GeneroRow>(&mut *self.conn.borrow_mut())
      .optional()
      .map_err(map_db_err)?;

    Ok(row_opt.map(row_to_genero))
  }

  fn list_generos(&self) -> Result<Vec<Genero>, CoreError> {
    use crate::schema::generos::dsl::*;

    let rows = generos
      .order(descricao.asc())
      .load::<GeneroRow>(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    Ok(rows.into_iter().map(row_to_genero).collect())
  }

  fn delete_genero(&self, genero: GeneroId) -> Result<(), CoreError> {
    use crate::schema::generos::dsl::*;

    let borradas = diesel::delete(generos.filter(id.eq(genero.as_i64())))
      .execute(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    if borradas == 0 { Err(CoreError::NotFound) } else { Ok(()) }
  }

  // -------- bandas --------

  fn insert_banda(&self, nueva: &NewBanda) -> Result<Banda, CoreError> {
    use crate::schema::bandas::dsl::*;

    let row: BandaRow = diesel::insert_into(bandas)
      .values(banda_to_new_row(nueva))
      .get_result(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    Ok(row_to_banda(row))
  }

  fn find_banda(&self, banda: BandaId) -> Result<Option<Banda>, CoreError> {
    use crate::schema::bandas::dsl::*;

    let row_opt = bandas
      .filter(id.eq(banda.as_i64()))
      .first::<BandaRow>(&mut *self.conn.borrow_mut())
      .optional()
      .map_err(map_db_err)?;

    Ok(row_opt.map(row_to_banda))
  }

  fn list_bandas(&self) -> Result<Vec<Banda>, CoreError> {
    use crate::schema::bandas::dsl::*;

    let rows = bandas
      .order(nome.asc())
      .load::<BandaRow>(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    Ok(rows.into_iter().map(row_to_banda).collect())
  }

  fn bandas_de_genero(&self, genero: GeneroId) -> Result<Vec<Banda>, CoreError> {
    use crate::schema::bandas::dsl::*;

    let rows = bandas
      .filter(genero_id.eq(genero.as_i64()))
      .order(nome.asc())
      .load::<BandaRow>(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    Ok(rows.into_iter().map(row_to_banda).collect())
  }

  fn delete_banda(&self, banda: BandaId) -> Result<(), CoreError> {
    use crate::schema::bandas::dsl::*;

    let borradas = diesel::delete(bandas.filter(id.eq(banda.as_i64())))
      .execute(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    if borradas == 0 { Err(CoreError::NotFound) } else { Ok(()) }
  }

  // -------- albums --------

  fn insert_album(&self, nuevo: &NewAlbum) -> Result<Album, CoreError> {
    use crate::schema::albums::dsl::*;

    let row: AlbumRow = diesel::insert_into(albums)
      .values(album_to_new_row(nuevo))
      .get_result(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    Ok(row_to_album(row))
  }

  fn find_album(&self, album: AlbumId) -> Result<Option<Album>, CoreError> {
    use crate::schema::albums::dsl::*;

    let row_opt = albums
      .filter(id.eq(album.as_i64()))
      .first::<AlbumRow>(&mut *self.conn.borrow_mut())
      .optional()
      .map_err(map_db_err)?;

    Ok(row_opt.map(row_to_album))
  }

  fn list_albums(&self) -> Result<Vec<Album>, CoreError> {
    use crate::schema::albums::dsl::*;

    let rows = albums
      .order(nome.asc())
      .load::<AlbumRow>(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    Ok(rows.into_iter().map(row_to_album).collect())
  }

  fn albums_de_banda(&self, banda: BandaId) -> Result<Vec<Album>, CoreError> {
    use crate::schema::albums::dsl::*;

    let rows = albums
      .filter(banda_id.eq(banda.as_i64()))
      .order(nome.asc())
      .load::<AlbumRow>(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    Ok(rows.into_iter().map(row_to_album).collect())
  }

  fn delete_album(&self, album: AlbumId) -> Result<(), CoreError> {
    use crate::schema::albums::dsl::*;

    let borradas = diesel::delete(albums.filter(id.eq(album.as_i64())))
      .execute(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    if borradas == 0 { Err(CoreError::NotFound) } else { Ok(()) }
  }

  // -------- musicas --------

  fn insert_musica(&self, nueva: &NewMusica) -> Result<Musica, CoreError> {
    use crate::schema::musicas::dsl::*;

    let row: MusicaRow = diesel::insert_into(musicas)
      .values(musica_to_new_row(nueva))
      .get_result(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    Ok(row_to_musica(row))
  }

  fn find_musica(&self, musica: MusicaId) -> Result<Option<Musica>, CoreError> {
    use crate::schema::musicas::dsl::*;

    let row_opt = musicas
      .filter(id.eq(musica.as_i64()))
      .first::<MusicaRow>(&mut *self.conn.borrow_mut())
      .optional()
      .map_err(map_db_err)?;

    Ok(row_opt.map(row_to_musica))
  }

  fn list_musicas(&self) -> Result<Vec<Musica>, CoreError> {
    use crate::schema::musicas::dsl::*;

    let rows = musicas
      .order((album_id.asc(), ordem.asc()))
      .load::<MusicaRow>(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    Ok(rows.into_iter().map(row_to_musica).collect())
  }

  fn musicas_de_album(&self, album: AlbumId) -> Result<Vec<Musica>, CoreError> {
    use crate::schema::musicas::dsl::*;

    let rows = musicas
      .filter(album_id.eq(album.as_i64()))
      .order(ordem.asc())
      .load::<MusicaRow>(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    Ok(rows.into_iter().map(row_to_musica).collect())
  }

  fn delete_musica(&self, musica: MusicaId) -> Result<(), CoreError> {
    use crate::schema::musicas::dsl::*;

    let borradas = diesel::delete(musicas.filter(id.eq(musica.as_i64())))
      .execute(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    if borradas == 0 { Err(CoreError::NotFound) } else { Ok(()) }
  }

  fn set_musica_duracao(&self, musica: MusicaId, duracao: Duration) -> Result<(), CoreError> {
    use crate::schema::musicas::dsl::*;

    let tocadas = diesel::update(musicas.filter(id.eq(musica.as_i64())))
      .set(duracao_ms.eq(duracao.as_millis() as i64))
      .execute(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    if tocadas == 0 { Err(CoreError::NotFound) } else { Ok(()) }
  }

  // -------- likes --------

  fn insert_like(&self, nuevo: &NewLike) -> Result<Like, CoreError> {
    use crate::schema::likes::dsl::*;

    let row: LikeRow = diesel::insert_into(likes)
      .values(like_to_new_row(nuevo))
      .get_result(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    row_to_like(row)
  }

  fn list_likes(&self) -> Result<Vec<Like>, CoreError> {
    use crate::schema::likes::dsl::*;

    let rows = likes
      .order(data.asc())
      .load::<LikeRow>(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    rows.into_iter().map(row_to_like).collect()
  }

  fn likes_de_musica(&self, musica: MusicaId) -> Result<Vec<Like>, CoreError> {
    use crate::schema::likes::dsl::*;

    let rows = likes
      .filter(musica_id.eq(musica.as_i64()))
      .order(data.asc())
      .load::<LikeRow>(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    rows.into_iter().map(row_to_like).collect()
  }

  fn delete_like(&self, like: LikeId) -> Result<(), CoreError> {
    use crate::schema::likes::dsl::*;

    let borradas = diesel::delete(likes.filter(id.eq(like.as_i64())))
      .execute(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    if borradas == 0 { Err(CoreError::NotFound) } else { Ok(()) }
  }

  // -------- tokens --------

  fn insert_token(&self, token: &Token) -> Result<(), CoreError> {
    use crate::schema::tokens::dsl::*;

    let row = TokenRow { chave: token.chave.clone(), usuario_id: token.usuario_id.as_i64() };

    diesel::insert_into(tokens)
      .values(&row)
      .execute(&mut *self.conn.borrow_mut())
      .map_err(map_db_err)?;

    Ok(())
  }

  fn find_token_de_usuario(&self, usuario: UsuarioId) -> Result<Option<Token>, CoreError> {
    use crate::schema::tokens::dsl::*;

    let row_opt = tokens
      .filter(usuario_id.eq(usuario.as_i64()))
      .first::<TokenRow>(&mut *self.conn.borrow_mut())
      .optional()
      .map_err(map_db_err)?;

    Ok(row_opt.map(|row| Token {
      chave: row.chave,
      usuario_id: UsuarioId::from_raw(row.usuario_id),
    }))
  }
}
