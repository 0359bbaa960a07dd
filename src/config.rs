//! Viewer settings, read from a TOML file.
//!
//! Every field is optional in the file; missing ones take the defaults
//! below. A missing file is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::application::{DEFAULT_CELL_SIZE, DEFAULT_SPEED};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid setting: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: i32,
    pub window_height: i32,
    /// On-screen size of one cell in pixels
    pub cell_size: f32,
    /// Generations per second while playing
    pub animation_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            cell_size: DEFAULT_CELL_SIZE,
            animation_speed: DEFAULT_SPEED,
        }
    }
}

impl Settings {
    /// Parse and validate settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`; defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load from the default location
    pub fn load_default() -> Result<Self, SettingsError> {
        Self::load(&Self::config_path())
    }

    /// Resolve a load result, logging it and falling back to defaults on error
    pub fn or_default(result: &Result<Self, SettingsError>) -> Self {
        let path = Self::config_path();
        match result {
            Ok(settings) => {
                info!(path = %path.display(), "settings loaded");
                settings.clone()
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "using default settings");
                Self::default()
            }
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sparse_life")
            .join("config.toml")
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(SettingsError::Invalid("window size must be positive"));
        }
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            return Err(SettingsError::Invalid("cell_size must be positive"));
        }
        if self.animation_speed.is_nan() || self.animation_speed <= 0.0 {
            return Err(SettingsError::Invalid("animation_speed must be positive"));
        }
        Ok(())
    }
}
