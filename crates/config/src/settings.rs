//! Configuration structures for tallypad settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General application settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Keystroke sound settings
    #[serde(default)]
    pub sound: SoundSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Theme used when no preference has been saved yet
    #[serde(default = "default_theme_name")]
    pub default_theme: String,

    /// Event loop tick in milliseconds (drives notification timers)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Which keystroke sound implementation to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundVariant {
    /// Clicks synthesized from oscillators and filtered noise
    #[default]
    Synthesized,
    /// Playback of a prerecorded sample
    Sampled,
}

/// Keystroke sound settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundSettings {
    /// Sound implementation
    #[serde(default)]
    pub variant: SoundVariant,

    /// Audio file for the sampled variant
    #[serde(default)]
    pub sample_path: Option<String>,

    /// Output volume multiplier (1.0 = nominal)
    #[serde(default = "default_sound_volume")]
    pub volume: f32,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

fn default_theme_name() -> String {
    defaults::THEME_NAME.to_string()
}

fn default_tick_rate_ms() -> u64 {
    defaults::TICK_RATE_MS
}

fn default_sound_volume() -> f32 {
    defaults::SOUND_VOLUME
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            default_theme: default_theme_name(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            variant: SoundVariant::default(),
            sample_path: None,
            volume: default_sound_volume(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
