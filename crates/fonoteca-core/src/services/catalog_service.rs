use chrono::Utc;
use uuid::Uuid;

use crate::domain::album::{Album, CreateAlbum, NewAlbum};
use crate::domain::banda::{Banda, CreateBanda, NewBanda};
use crate::domain::credenciales::{hash_password, normalize_email};
use crate::domain::genero::{CreateGenero, Genero, NewGenero};
use crate::domain::like::{Like, NewLike};
use crate::domain::musica::{CreateMusica, Musica, NewMusica};
use crate::domain::token::Token;
use crate::domain::upload;
use crate::domain::usuario::{CreateUsuario, NewUsuario, Usuario};
use crate::domain::{AlbumId, BandaId, GeneroId, LikeId, MusicaId, UsuarioId};
use crate::errors::CoreError;
use crate::pipeline::{MusicaPipeline, TagContext};
use crate::ports::{AssetStore, AudioProbe, CatalogRepository};
use crate::reactions::{ClassifyArquivo, ResolveDuracao, WriteTags};

/// Servicio del catálogo: valida, persiste y dispara el pipeline de
/// reacciones. Es la única puerta de entrada de escrituras; las reacciones
/// nunca se registran de forma ambiental.
pub struct CatalogService<R, P, A>
where
  R: CatalogRepository,
  P: AudioProbe,
  A: AssetStore,
{
  repo: R,
  probe: P,
  assets: A,
}

impl<R, P, A> CatalogService<R, P, A>
where
  R: CatalogRepository,
  P: AudioProbe,
  A: AssetStore,
{
  pub fn new(repo: R, probe: P, assets: A) -> Self {
    Self { repo, probe, assets }
  }

  /// Pipeline por defecto de `Musica`, en el orden del ciclo de vida:
  /// clasificación (pre), tags (post, blanda), duración (post, parche).
  fn musica_pipeline(&self) -> MusicaPipeline<'_> {
    MusicaPipeline::new(vec![
      Box::new(ClassifyArquivo),
      Box::new(WriteTags::new(&self.probe, &self.assets)),
      Box::new(ResolveDuracao::new(&self.probe, &self.assets)),
    ])
  }

  fn store_asset(&self, rel: &str, bytes: &[u8]) -> Result<(), CoreError> {
    self.assets.store(rel, bytes).map_err(|e| CoreError::Asset(e.to_string()))
  }

  fn remove_asset(&self, rel: &str) -> Result<(), CoreError> {
    self.assets.remove(rel).map_err(|e| CoreError::Asset(e.to_string()))
  }

  // -------- usuarios --------

  /// Fábrica de usuarios.
  ///
  /// Rechaza e-mail vacío, contraseña vacía y contraseña de menos de 6
  /// caracteres; normaliza el e-mail, hashea la contraseña, guarda el avatar
  /// si viene y acuña exactamente un token en el primer persist.
  pub fn create_usuario(&self, input: CreateUsuario) -> Result<Usuario, CoreError> {
    if input.email.trim().is_empty() {
      return Err(CoreError::Validation("el e-mail es obligatorio".into()));
    }

    if input.password.is_empty() {
      return Err(CoreError::Validation("la contraseña es obligatoria".into()));
    }

    if input.password.chars().count() < 6 {
      return Err(CoreError::Validation("la contraseña debe tener al menos 6 caracteres".into()));
    }

    let email = normalize_email(&input.email);
    let salt = Uuid::new_v4().simple().to_string();
    let password_hash = hash_password(&input.password, &salt);

    let avatar = match &input.avatar {
      Some(subida) => {
        let rel = upload::avatar_path(&input.nome, &email, subida);
        self.store_asset(&rel, &subida.bytes)?;
        Some(rel)
      }
      None => None,
    };

    let nuevo = NewUsuario {
      email,
      nome: input.nome,
      sobrenome: input.sobrenome,
      password_hash,
      avatar,
      is_active: true,
      is_admin: false,
    };

    let usuario = self.repo.insert_usuario(&nuevo)?;
    self.repo.insert_token(&Token::mint(usuario.id))?;

    Ok(usuario)
  }

  /// Variante administradora: la misma fábrica y después un update dirigido
  /// del flag, como dos pasos separados.
  pub fn create_superusuario(&self, input: CreateUsuario) -> Result<Usuario, CoreError> {
    let mut usuario = self.create_usuario(input)?;

    self.repo.set_usuario_admin(usuario.id, true)?;
    usuario.is_admin = true;

    Ok(usuario)
  }

  pub fn get_usuario(&self, id: UsuarioId) -> Result<Option<Usuario>, CoreError> {
    self.repo.find_usuario(id)
  }

  pub fn list_usuarios(&self) -> Result<Vec<Usuario>, CoreError> {
    self.repo.list_usuarios()
  }

  pub fn token_de_usuario(&self, id: UsuarioId) -> Result<Option<Token>, CoreError> {
    self.repo.find_token_de_usuario(id)
  }

  /// Borra el usuario (los likes caen en cascada) y después su avatar.
  pub fn delete_usuario(&self, id: UsuarioId) -> Result<(), CoreError> {
    let usuario = self.repo.find_usuario(id)?.ok_or(CoreError::NotFound)?;

    self.repo.delete_usuario(id)?;

    if let Some(avatar) = &usuario.avatar {
      self.remove_asset(avatar)?;
    }

    Ok(())
  }

  // -------- generos --------

  pub fn create_genero(&self, input: CreateGenero) -> Result<Genero, CoreError> {
    if input.descricao.trim().is_empty() {
      return Err(CoreError::Validation("la descripción es obligatoria".into()));
    }

    let imagem = match &input.imagem {
      Some(subida) => {
        let rel = upload::genero_imagem_path(subida);
        self.store_asset(&rel, &subida.bytes)?;
        Some(rel)
      }
      None => None,
    };

    self.repo.insert_genero(&NewGenero { descricao: input.descricao, imagem })
  }

  pub fn get_genero(&self, id: GeneroId) -> Result<Option<Genero>, CoreError> {
    self.repo.find_genero(id)
  }

  pub fn list_generos(&self) -> Result<Vec<Genero>, CoreError> {
    self.repo.list_generos()
  }

  /// Borra el género con toda su descendencia (bandas, álbumes, pistas) y
  /// después los binarios huérfanos de todo el subárbol.
  pub fn delete_genero(&self, id: GeneroId) -> Result<(), CoreError> {
    let genero = self.repo.find_genero(id)?.ok_or(CoreError::NotFound)?;

    // Recolectar las rutas antes de borrar: tras la cascada las filas ya no
    // están para preguntarles.
    let mut huerfanos = Vec::new();
    if let Some(imagem) = &genero.imagem {
      huerfanos.push(imagem.clone());
    }

    for banda in self.repo.bandas_de_genero(id)? {
      if let Some(imagem) = &banda.imagem {
        huerfanos.push(imagem.clone());
      }
      self.recolectar_de_banda(banda.id, &mut huerfanos)?;
    }

    self.repo.delete_genero(id)?;
    self.limpiar_huerfanos(&huerfanos)
  }

  // -------- bandas --------

  pub fn create_banda(&self, input: CreateBanda) -> Result<Banda, CoreError> {
    self.repo.find_genero(input.genero_id)?.ok_or(CoreError::NotFound)?;

    let imagem = match &input.imagem {
      Some(subida) => {
        let rel = upload::banda_imagem_path(subida);
        self.store_asset(&rel, &subida.bytes)?;
        Some(rel)
      }
      None => None,
    };

    self.repo.insert_banda(&NewBanda { nome: input.nome, genero_id: input.genero_id, imagem })
  }

  pub fn get_banda(&self, id: BandaId) -> Result<Option<Banda>, CoreError> {
    self.repo.find_banda(id)
  }

  pub fn list_bandas(&self) -> Result<Vec<Banda>, CoreError> {
    self.repo.list_bandas()
  }

  pub fn delete_banda(&self, id: BandaId) -> Result<(), CoreError> {
    let banda = self.repo.find_banda(id)?.ok_or(CoreError::NotFound)?;

    let mut huerfanos = Vec::new();
    if let Some(imagem) = &banda.imagem {
      huerfanos.push(imagem.clone());
    }
    self.recolectar_de_banda(id, &mut huerfanos)?;

    self.repo.delete_banda(id)?;
    self.limpiar_huerfanos(&huerfanos)
  }

  // -------- albums --------

  pub fn create_album(&self, input: CreateAlbum) -> Result<Album, CoreError> {
    self.repo.find_banda(input.banda_id)?.ok_or(CoreError::NotFound)?;

    if input.data_lancamento <= 0 {
      return Err(CoreError::Validation("el año de lanzamiento debe ser positivo".into()));
    }

    let capa = upload::capa_path(&input.capa);
    self.store_asset(&capa, &input.capa.bytes)?;

    self.repo.insert_album(&NewAlbum {
      nome: input.nome,
      banda_id: input.banda_id,
      data_lancamento: input.data_lancamento,
      capa,
    })
  }

  pub fn get_album(&self, id: AlbumId) -> Result<Option<Album>, CoreError> {
    self.repo.find_album(id)
  }

  pub fn list_albums(&self) -> Result<Vec<Album>, CoreError> {
    self.repo.list_albums()
  }

  pub fn delete_album(&self, id: AlbumId) -> Result<(), CoreError> {
    let album = self.repo.find_album(id)?.ok_or(CoreError::NotFound)?;

    let mut huerfanos = vec![album.capa.clone()];
    for musica in self.repo.musicas_de_album(id)? {
      huerfanos.push(musica.arquivo.clone());
    }

    self.repo.delete_album(id)?;
    self.limpiar_huerfanos(&huerfanos)
  }

  // -------- musicas --------

  /// Crea una pista: clasifica (pre-persist, rechaza extensiones
  /// desconocidas antes de escribir un solo byte), guarda el audio, persiste
  /// la fila, escribe tags y resuelve la duración (post-persist).
  pub fn create_musica(&self, input: CreateMusica) -> Result<Musica, CoreError> {
    let album = self.repo.find_album(input.album_id)?.ok_or(CoreError::NotFound)?;
    let banda = self.repo.find_banda(album.banda_id)?.ok_or(CoreError::NotFound)?;
    let genero = self.repo.find_genero(banda.genero_id)?.ok_or(CoreError::NotFound)?;

    let arquivo = upload::musica_path(&banda.nome, &album.nome, &input.arquivo);

    let mut draft = NewMusica {
      nome: input.nome,
      album_id: album.id,
      ordem: input.ordem,
      arquivo,
      arquivo_tipo: None,
    };

    let pipeline = self.musica_pipeline();
    pipeline.run_before_save(&mut draft)?;

    self.store_asset(&draft.arquivo, &input.arquivo.bytes)?;
    let musica = self.repo.insert_musica(&draft)?;

    let ctx = TagContext { album: album.nome, banda: banda.nome, genero: genero.descricao };
    let patch = pipeline.run_after_save(&musica, &ctx)?;

    if let Some(duracao) = patch.duracao {
      self.repo.set_musica_duracao(musica.id, duracao)?;
    }

    Ok(Musica { duracao: patch.duracao, ..musica })
  }

  pub fn get_musica(&self, id: MusicaId) -> Result<Option<Musica>, CoreError> {
    self.repo.find_musica(id)
  }

  pub fn list_musicas(&self) -> Result<Vec<Musica>, CoreError> {
    self.repo.list_musicas()
  }

  pub fn delete_musica(&self, id: MusicaId) -> Result<(), CoreError> {
    let musica = self.repo.find_musica(id)?.ok_or(CoreError::NotFound)?;

    self.repo.delete_musica(id)?;
    self.remove_asset(&musica.arquivo)
  }

  // -------- likes --------

  pub fn dar_like(&self, usuario_id: UsuarioId, musica_id: MusicaId) -> Result<Like, CoreError> {
    self.repo.find_usuario(usuario_id)?.ok_or(CoreError::NotFound)?;
    self.repo.find_musica(musica_id)?.ok_or(CoreError::NotFound)?;

    self.repo.insert_like(&NewLike { data: Utc::now(), usuario_id, musica_id })
  }

  pub fn list_likes(&self) -> Result<Vec<Like>, CoreError> {
    self.repo.list_likes()
  }

  pub fn quitar_like(&self, id: LikeId) -> Result<(), CoreError> {
    self.repo.delete_like(id)
  }

  // -------- internos --------

  fn recolectar_de_banda(&self, id: BandaId, huerfanos: &mut Vec<String>) -> Result<(), CoreError> {
    for album in self.repo.albums_de_banda(id)? {
      huerfanos.push(album.capa.clone());
      for musica in self.repo.musicas_de_album(album.id)? {
        huerfanos.push(musica.arquivo.clone());
      }
    }

    Ok(())
  }

  fn limpiar_huerfanos(&self, huerfanos: &[String]) -> Result<(), CoreError> {
    for rel in huerfanos {
      self.remove_asset(rel)?;
    }

    Ok(())
  }
}
