//! Configuration module
//!
//! Optional TOML settings shared by both tools

mod settings;

pub use settings::{AppConfig, CatConfig, ConfigError, LoggingConfig, STRICT_EXIT_ENV};

use directories::ProjectDirs;
use std::path::PathBuf;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "LINEUTILS_CONFIG";

/// Get the application configuration directory
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("org", "lineutils", "lineutils")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the config file path
///
/// `$LINEUTILS_CONFIG` wins over `<config_dir>/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => config_dir().map(|dir| dir.join("config.toml")),
    }
}
