pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod pollinations;
pub mod server;

pub use config::{Config, ServerConfig, UpstreamConfig};
pub use error::{PixgenError, Result};
pub use models::{ErrorResponse, GenerateRequest, GenerateResponse};
pub use pollinations::UrlBuilder;
