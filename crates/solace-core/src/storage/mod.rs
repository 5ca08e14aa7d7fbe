//! Persistence: SQLite journal/chat storage and TOML configuration.

mod config;
pub mod database;

pub use config::{ChatConfig, Config, NotificationsConfig};
pub use database::Database;

use std::path::PathBuf;

/// Returns `~/.config/solace[-dev]/` based on SOLACE_ENV.
///
/// Set SOLACE_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SOLACE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("solace-dev")
    } else {
        base_dir.join("solace")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
