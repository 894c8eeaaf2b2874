//! Crossrate command-line support: configuration and quote file loading.

pub mod config;
pub mod loader;

pub use config::CliConfig;
pub use loader::{load_quotes, parse_quotes};
