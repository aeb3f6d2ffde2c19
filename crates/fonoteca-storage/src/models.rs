use crate::schema::{albums, bandas, generos, likes, musicas, tokens, usuarios};

use diesel::prelude::*;

#[derive(Debug, Queryable)]
#[diesel(table_name = usuarios)]
pub struct UsuarioRow {
  pub id: i64,
  pub email: String,
  pub nome: String,
  pub sobrenome: String,
  pub password_hash: String,
  pub avatar: Option<String>,
  pub is_active: bool,
  pub is_admin: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = usuarios)]
pub struct NewUsuarioRow {
  pub email: String,
  pub nome: String,
  pub sobrenome: String,
  pub password_hash: String,
  pub avatar: Option<String>,
  pub is_active: bool,
  pub is_admin: bool,
}

#[derive(Debug, Queryable)]
#[diesel(table_name = generos)]
pub struct GeneroRow {
  pub id: i64,
  pub descricao: String,
  pub imagem: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = generos)]
pub struct NewGeneroRow {
  pub descricao: String,
  pub imagem: Option<String>,
}

#[derive(Debug, Queryable)]
#[diesel(table_name = bandas)]
pub struct BandaRow {
  pub id: i64,
  pub nome: String,
  pub genero_id: i64,
  pub imagem: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = bandas)]
pub struct NewBandaRow {
  pub nome: String,
  pub genero_id: i64,
  pub imagem: Option<String>,
}

#[derive(Debug, Queryable)]
#[diesel(table_name = albums)]
pub struct AlbumRow {
  pub id: i64,
  pub nome: String,
  pub banda_id: i64,
  pub data_lancamento: i32,
  pub capa: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = albums)]
pub struct NewAlbumRow {
  pub nome: String,
  pub banda_id: i64,
  pub data_lancamento: i32,
  pub capa: String,
}

#[derive(Debug, Queryable)]
#[diesel(table_name = musicas)]
pub struct MusicaRow {
  pub id: i64,
  pub nome: String,
  pub album_id: i64,
  pub ordem: Option<i32>,
  pub arquivo: String,
  pub arquivo_tipo: Option<String>,
  pub duracao_ms: Option<i64>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = musicas)]
pub struct NewMusicaRow {
  pub nome: String,
  pub album_id: i64,
  pub ordem: Option<i32>,
  pub arquivo: String,
  pub arquivo_tipo: Option<String>,
}

#[derive(Debug, Queryable)]
#[diesel(table_name = likes)]
pub struct LikeRow {
  pub id: i64,
  pub data: String,
  pub usuario_id: i64,
  pub musica_id: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = likes)]
pub struct NewLikeRow {
  pub data: String,
  pub usuario_id: i64,
  pub musica_id: i64,
}

#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = tokens)]
pub struct TokenRow {
  pub chave: String,
  pub usuario_id: i64,
}
