//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Catalog backend client.
pub mod library;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use library::LibraryClient;
