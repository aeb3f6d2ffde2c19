pub mod domain;
pub mod errors;
pub mod pipeline;
pub mod ports;
pub mod reactions;
pub mod services;

pub use errors::CoreError;
