//! User configuration management
//!
//! Saved as TOML under the platform config directory. Every field has a
//! default so partial or missing files load cleanly.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use watchparty_core::LogConfig;

/// User configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Name shown for the local viewer's chat messages
    #[serde(default = "default_display_name")]
    pub display_name: String,
    /// Party snapshot to open when none is given on the command line
    #[serde(default)]
    pub party_path: Option<PathBuf>,
    /// Host loop rate in ticks per second
    #[serde(default = "default_tick_hz")]
    pub tick_hz: u32,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

fn default_display_name() -> String {
    "You".to_string()
}

fn default_tick_hz() -> u32 {
    30
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            display_name: default_display_name(),
            party_path: None,
            tick_hz: default_tick_hz(),
            log: LogConfig::default(),
        }
    }
}

impl UserConfig {
    /// Default on-disk location.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("WatchParty").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to load config: {:#}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config =
            toml::from_str(&data).with_context(|| format!("Failed to parse config: {:?}", path))?;
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        let data = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, data).with_context(|| format!("Failed to write config: {:?}", path))?;
        Ok(())
    }
}
