use crate::error::BlinkyError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INTERVAL_SECS: u64 = 5;

/// Saved viewer defaults; command-line flags override every field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Host or URL used when none is given on the command line
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
    #[serde(default)]
    pub show_all: bool,
    /// Query a collector instead of a single agent
    #[serde(default)]
    pub collector: bool,
}

fn default_interval() -> u64 {
    DEFAULT_INTERVAL_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: None,
            interval_secs: DEFAULT_INTERVAL_SECS,
            show_all: false,
            collector: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load from an explicit path
    ///
    /// A missing or empty file gives the defaults. So does a corrupt one,
    /// with a warning, so a bad file never keeps the viewer from starting.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        match serde_json::from_str::<Config>(&data) {
            Ok(config) => Ok(config.sanitized()),
            Err(e) => {
                log::warn!("Ignoring corrupt config file {:?}: {}", path, e);
                Ok(Config::default())
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(path, data).with_context(|| format!("Failed to write config file: {:?}", path))?;

        log::debug!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| BlinkyError::config("Could not determine config directory"))?;

        Ok(config_dir.join("blinky").join("config.json"))
    }

    // Interval below one second is never valid
    fn sanitized(mut self) -> Self {
        if self.interval_secs == 0 {
            log::warn!(
                "Config interval must be at least 1 second, using {}",
                DEFAULT_INTERVAL_SECS
            );
            self.interval_secs = DEFAULT_INTERVAL_SECS;
        }
        self
    }
}
