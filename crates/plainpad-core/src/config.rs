//! Editor configuration.
//!
//! Every field has a default, and the defaults describe the stock window.
//! A `config.toml` in the user's config directory may override any of
//! them; the editor only ever reads it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{CoreError, CoreResult};

/// Main editor configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window settings
    pub window: WindowConfig,

    /// Text area settings
    pub editor: EditorConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("using default config: {}", e);
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        toml::from_str(&content).map_err(|e| CoreError::Config(e.to_string()))
    }

    fn load_from_default_path() -> CoreResult<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> CoreResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CoreError::Config("no config directory".to_string()))?;
        Ok(config_dir.join("plainpad").join("config.toml"))
    }
}

/// Window configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial width in logical pixels
    pub width: f32,

    /// Initial height in logical pixels
    pub height: f32,

    /// Window title
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            title: "TextEditor".to_string(),
        }
    }
}

/// Text area configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Font size in points
    pub font_size: f32,

    /// Wrap long lines at word boundaries
    pub word_wrap: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            word_wrap: true,
        }
    }
}
