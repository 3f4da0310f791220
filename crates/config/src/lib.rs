//! Configuration management for tallypad.
//!
//! This crate provides:
//! - `Config` - TOML configuration with XDG directory conventions
//! - `PreferenceStore` - string-keyed store for settings the user toggles at runtime

pub mod constants;
mod preferences;
mod settings;
mod xdg;

pub use preferences::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, SOUND_ENABLED_KEY, THEME_KEY,
};
pub use settings::{Config, GeneralSettings, LoggingSettings, SoundSettings, SoundVariant};
pub use xdg::{get_cache_dir, get_config_dir, get_data_dir};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const THEME_NAME: &str = "light";
    pub const TICK_RATE_MS: u64 = 16;
    pub const SOUND_VOLUME: f32 = 1.0;
    pub const MIN_LOG_LEVEL: &str = "info";
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// On first run, creates the config file with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `path`, creating it with defaults if missing.
    ///
    /// Missing keys are filled with defaults and written back so the file
    /// always shows every available option.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&original_content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;

        let normalized_content = toml::to_string_pretty(&config)?;
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Get path to user themes directory.
    pub fn get_themes_dir() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("themes"))
    }

    /// Get path to the preferences file.
    pub fn preferences_file_path() -> Result<PathBuf> {
        Ok(get_data_dir()?.join("preferences.toml"))
    }

    /// Log file path: the configured override or the cache directory.
    pub fn log_file_path(&self) -> PathBuf {
        match self.logging.file_path {
            Some(ref path) => PathBuf::from(path),
            None => get_cache_dir()
                .unwrap_or_else(|_| std::env::temp_dir())
                .join("tallypad.log"),
        }
    }
}
