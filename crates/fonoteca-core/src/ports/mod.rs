pub mod asset_store;
pub mod audio_probe;
pub mod catalog_repository;

pub use asset_store::{AssetError, AssetStore};
pub use audio_probe::{AudioProbe, ProbeError, TagSet};
pub use catalog_repository::CatalogRepository;
