//! Configuration management for the dinap CLI

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/app.yaml";

/// Keys follow the app.yaml convention (SAVE_DIR, LOG_DIR).
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Config {
    pub save_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file, or default when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        serde_yaml::from_str(&contents).context("Failed to parse config file")
    }

    /// The save root, required by everything except direct --save dumps.
    pub fn save_dir(&self) -> Result<&Path> {
        self.save_dir.as_deref().context(
            "SAVE_DIR not set. Add it to config/app.yaml or pass --save with a file path.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config::load(&temp_dir.path().join("app.yaml")).unwrap();
        assert!(config.save_dir.is_none());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_load_app_yaml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("app.yaml");
        fs::write(&path, "SAVE_DIR: /saves/dinap\nLOG_DIR: /var/log/dinap\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.save_dir.as_deref(), Some(Path::new("/saves/dinap")));
        assert_eq!(config.log_dir.as_deref(), Some(Path::new("/var/log/dinap")));
    }

    #[test]
    fn test_save_dir_required_message() {
        let config = Config::default();
        let err = config.save_dir().unwrap_err();
        assert!(err.to_string().contains("SAVE_DIR"));
    }
}
