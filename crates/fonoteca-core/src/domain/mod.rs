pub mod album;
pub mod banda;
pub mod credenciales;
pub mod genero;
pub mod ids;
pub mod like;
pub mod media_type;
pub mod musica;
pub mod token;
pub mod upload;
pub mod usuario;

pub use ids::{AlbumId, BandaId, GeneroId, LikeId, MusicaId, UsuarioId};
pub use upload::Upload;
