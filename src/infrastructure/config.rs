//! Configuration management

use crate::error::{EntryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How a full rewrite replaces the backing file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteMode {
    /// Truncate and write in place. A crash mid-write can leave a partial file.
    #[default]
    Overwrite,
    /// Write a temp file next to the target, then rename it into place
    Atomic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub rewrite: RewriteMode,
}

impl StoreConfig {
    /// Create a config for the given list file with default rewrite mode
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            path: path.into(),
            rewrite: RewriteMode::default(),
        }
    }

    /// Load config from a TOML file
    pub fn load_from_file(config_path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(config_path)?;

        let config: StoreConfig = toml::from_str(&contents).map_err(|e| {
            EntryError::Config(format!(
                "Failed to parse {}: {}",
                config_path.display(),
                e
            ))
        })?;

        if config.path.as_os_str().is_empty() {
            return Err(EntryError::Config(format!(
                "Missing list file path in {}",
                config_path.display()
            )));
        }

        Ok(config)
    }

    /// Save config as TOML
    pub fn save_to_file(&self, config_path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }
}
