use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Folder browser configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Names that are never listed in the tree and never served as the
    /// first segment of a file path
    #[serde(default = "default_excluded_names")]
    pub excluded_names: Vec<String>,

    /// File served for `/` and `/index.html`, relative to the root
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

fn default_excluded_names() -> Vec<String> {
    vec![
        "__vc".to_string(),
        "api".to_string(),
        "node_modules".to_string(),
    ]
}

fn default_index_file() -> String {
    "index.html".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            excluded_names: default_excluded_names(),
            index_file: default_index_file(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse config from TOML text. Missing fields take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_excludes_tooling_dirs() {
        let config = Config::default();
        assert_eq!(config.excluded_names, vec!["__vc", "api", "node_modules"]);
        assert_eq!(config.index_file, "index.html");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.excluded_names, Config::default().excluded_names);
        assert_eq!(config.index_file, "index.html");
    }

    #[test]
    fn test_partial_toml_overrides_one_field() {
        let config = Config::from_toml(r#"excluded_names = ["target", "dist"]"#).unwrap();
        assert_eq!(config.excluded_names, vec!["target", "dist"]);
        assert_eq!(config.index_file, "index.html");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = Config::from_toml("excluded_names = 42");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("browser.toml");
        std::fs::write(&path, "index_file = \"home.html\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.index_file, "home.html");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::from_file(&temp_dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }
}
