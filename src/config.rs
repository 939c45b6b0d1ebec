//! User configuration.
//!
//! Stored as TOML in the platform config directory
//! (`~/.config/vsp/config.toml` on Linux). Missing files and missing
//! fields fall back to defaults, so a config file is never required.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Player configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seconds the arrow keys seek by.
    pub seek_step_secs: f64,
    /// Player loop tick interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Directory site-root-relative audio locators resolve against.
    /// Defaults to the session file's own directory when unset.
    pub media_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seek_step_secs: 5.0,
            tick_rate_ms: 100,
            media_root: None,
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("vsp").join("config.toml"))
    }

    /// Load the config file, or defaults if none exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Write the config file, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}
