//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default simulated submission latency
pub const DEFAULT_SUBMISSION_LATENCY_MS: u64 = 1000;
/// Default time the signup confirmation stays up
pub const DEFAULT_AUTO_RESET_MS: u64 = 5000;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LandingConfig {
    /// Simulated submission latency in milliseconds
    pub submission_latency_ms: Option<u64>,
    /// Delay before the confirmation view returns to the form
    pub auto_reset_ms: Option<u64>,
    /// Start directly on the landing page
    pub skip_splash: Option<bool>,
    /// JSON file overriding the built-in page copy
    pub content_path: Option<PathBuf>,
}

impl LandingConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("ph", "agrinvest", "agrinvest-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: LandingConfig = serde_json::from_str(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration, falling back to defaults if the file is unusable
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!("Ignoring invalid config file: {err:#}");
            Self::default()
        })
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Save configuration to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn submission_latency(&self) -> Duration {
        Duration::from_millis(
            self.submission_latency_ms
                .unwrap_or(DEFAULT_SUBMISSION_LATENCY_MS),
        )
    }

    pub fn auto_reset(&self) -> Duration {
        Duration::from_millis(self.auto_reset_ms.unwrap_or(DEFAULT_AUTO_RESET_MS))
    }

    pub fn skip_splash(&self) -> bool {
        self.skip_splash.unwrap_or(false)
    }
}
