mod config;

pub use config::{ApiConfig, Config, UiConfig};

use std::path::PathBuf;

/// Returns `~/.config/habitly[-dev]/` based on HABITLY_ENV.
///
/// Set HABITLY_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HABITLY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("habitly-dev")
    } else {
        base_dir.join("habitly")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
