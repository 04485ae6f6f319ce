pub mod models;
pub mod error;
pub mod config;
pub mod auth;
pub mod client;
pub mod url_parser;
pub mod formatter;
pub mod dispatch;
pub mod params;
pub mod server;

// Re-export commonly used items
pub use models::*;
pub use error::*;
pub use config::{Config, ConfigError, RawConfig};
pub use auth::*;
pub use client::{Envelope, YapiClient};
pub use url_parser::*;
pub use formatter::*;
pub use server::YapiServer;
