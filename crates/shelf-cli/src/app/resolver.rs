//! Path resolution for config and data files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_path, read_config, ShelfConfig};

/// Resolve the config file path, checking SHELF_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("SHELF_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, or defaults when there is none.
pub fn load_config() -> anyhow::Result<ShelfConfig> {
    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        log::debug!("no config at {}, using defaults", config_path.display());
        return Ok(ShelfConfig::default());
    }
    read_config(&config_path)
}

/// Resolve the data file path: `--file`/SHELF_PATH, then config, then the
/// XDG data directory.
pub fn resolve_data_path(cli: &Cli, config: &ShelfConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.file.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    if let Some(path) = config.library.path.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    default_data_path()
}
