//! Configuration management for logmate

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logging::Severity;

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Destination log file, appended to on startup
    #[serde(default = "default_destination")]
    pub destination: PathBuf,

    /// Minimum severity written (default: info)
    #[serde(default = "default_level")]
    pub level: Severity,

    /// Rotate the destination once it reaches this many bytes (default: 0 = never)
    #[serde(default)]
    pub rotation_max_bytes: u64,

    /// Format template, stored on the logger but not applied to output yet
    #[serde(default)]
    pub format: String,
}

fn default_destination() -> PathBuf {
    PathBuf::from("logmate.log")
}

fn default_level() -> Severity {
    Severity::Info
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            destination: default_destination(),
            level: default_level(),
            rotation_max_bytes: 0,
            format: String::new(),
        }
    }
}

impl LoggerConfig {
    /// Load configuration from the default file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `path`, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }
}

/// Get the base configuration directory (~/.logmate)
/// Falls back to ./.logmate if home directory cannot be determined
pub fn config_dir() -> PathBuf {
    try_config_dir().unwrap_or_else(|| {
        tracing::warn!("Could not determine home directory, using current directory for config");
        PathBuf::from(".logmate")
    })
}

/// Try to get the base configuration directory, returning None if home dir is unavailable
pub fn try_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".logmate"))
}

/// Get the path to the config file
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}
