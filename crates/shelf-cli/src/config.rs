use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_LIBRARY_NAME: &str = "City Library";
pub const DEFAULT_DATA_FILENAME: &str = "library_data.json";

#[derive(Debug, Default, Deserialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub library: LibrarySection,
}

#[derive(Debug, Deserialize)]
pub struct LibrarySection {
    #[serde(default = "default_library_name")]
    pub name: String,
    pub path: Option<String>,
}

impl Default for LibrarySection {
    fn default() -> Self {
        Self {
            name: default_library_name(),
            path: None,
        }
    }
}

fn default_library_name() -> String {
    DEFAULT_LIBRARY_NAME.to_string()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(DEFAULT_DATA_FILENAME))
}

pub fn read_config(path: &Path) -> anyhow::Result<ShelfConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn parse_config(contents: &str) -> Result<ShelfConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("shelf"));
        }
    }
    Ok(home_dir()?.join(".config").join("shelf"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("shelf"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("shelf"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.library.name, DEFAULT_LIBRARY_NAME);
        assert!(config.library.path.is_none());
    }

    #[test]
    fn test_library_section() {
        let config =
            parse_config("[library]\nname = \"Home\"\npath = \"/tmp/books.json\"\n").unwrap();
        assert_eq!(config.library.name, "Home");
        assert_eq!(config.library.path.as_deref(), Some("/tmp/books.json"));
    }

    #[test]
    fn test_path_without_name_keeps_default_name() {
        let config = parse_config("[library]\npath = \"books.json\"\n").unwrap();
        assert_eq!(config.library.name, DEFAULT_LIBRARY_NAME);
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(parse_config("[library\nname = ").is_err());
    }
}
