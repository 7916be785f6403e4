use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::constants::*;

/// Application configuration with sensible defaults.
///
/// Can be overridden via ~/.config/statsman/config.toml
#[derive(Debug, Clone)]
pub struct Config {
    /// Refresh interval in milliseconds.
    pub refresh_interval_ms: u64,
    /// Rolling history capacity in samples.
    pub history_size: usize,
    /// Theme name.
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval_ms: DEFAULT_REFRESH_MS,
            history_size: DEFAULT_HISTORY_SIZE,
            theme: "default".to_string(),
        }
    }
}

/// Faults while loading the config file. Never fatal: callers warn
/// and fall back to defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// TOML-deserializable config file format.
/// All fields are optional -- missing fields use defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    refresh_interval_ms: Option<u64>,
    history_size: Option<usize>,
    theme: Option<String>,
}

impl Config {
    /// Load config from ~/.config/statsman/config.toml, falling back to
    /// defaults for any missing fields. A missing file is not an error;
    /// a broken one warns to stderr and uses pure defaults.
    pub fn load() -> Self {
        let path = config_file_path();
        if !path.exists() {
            return Config::default();
        }
        match Config::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}. Using defaults.", e);
                Config::default()
            }
        }
    }

    /// Parse a config file, merging its values over the defaults with
    /// sanity floors applied.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Config::default();
        if let Some(v) = file.refresh_interval_ms {
            config.refresh_interval_ms = v.max(MIN_REFRESH_MS);
        }
        if let Some(v) = file.history_size {
            config.history_size = v.max(MIN_HISTORY_SIZE);
        }
        if let Some(v) = file.theme {
            if !v.is_empty() {
                config.theme = v;
            }
        }
        Ok(config)
    }
}
