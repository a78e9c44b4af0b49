//! User configuration loaded from a TOML file.
//!
//! The file lives at `<config dir>/stepscope/config.toml` and is entirely
//! optional. A missing file yields [`Config::default`], and unknown or
//! missing fields fall back to their defaults so old config files keep
//! working after upgrades.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::player::Player;

/// Errors raised while loading or saving the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to encode config: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Settings that seed the player before a session starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial autoplay interval in milliseconds.
    #[serde(default = "default_speed_ms")]
    pub speed_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed_ms: default_speed_ms(),
        }
    }
}

/// Which parts of a step the renderer shows by default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show the insight line under the step description.
    #[serde(default = "default_true")]
    pub show_insights: bool,

    /// Show the variable snapshot panel.
    #[serde(default = "default_true")]
    pub show_variables: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_insights: true,
            show_variables: true,
        }
    }
}

fn default_speed_ms() -> u64 {
    Player::DEFAULT_SPEED_MS
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Returns the path of the config file, whether or not it exists.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("stepscope").join("config.toml"))
    }

    /// Loads the config file, falling back to defaults when it is missing.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads a config file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(toml::from_str(&raw)?)
    }

    /// Writes the config to its default location, creating directories as needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Writes the config to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let encoded = toml::to_string_pretty(self)?;
        fs::write(path, encoded)?;
        Ok(())
    }

    /// Playback speed clamped to the range the player accepts.
    pub fn effective_speed_ms(&self) -> u64 {
        self.playback
            .speed_ms
            .clamp(Player::MIN_SPEED_MS, Player::MAX_SPEED_MS)
    }
}
