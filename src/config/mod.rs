//! Client configuration.
//!
//! Loaded from `config.toml` in the platform config directory (or an
//! explicit path). A missing default file yields [`Config::default`].

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config};
