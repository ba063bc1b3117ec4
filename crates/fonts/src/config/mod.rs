//! Configuration system

pub use serde::{Serialize, Deserialize};

use crate::foundation::fixed::REFERENCE_PIXEL_SIZE;
use std::time::Duration;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Settings shared by every font in a [`FontLibrary`](crate::font::FontLibrary)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSystemConfig {
    /// Seconds a font request may stay unresolved before it becomes NotFound
    pub default_timeout: f32,
    /// Pixel size used by `request_default`
    pub default_pixel_size: u32,
    /// Glyph substituted for unmapped characters
    pub fallback_character: char,
    /// Pixel size line heights are authored at
    pub reference_pixel_size: u32,
}

impl Default for FontSystemConfig {
    fn default() -> Self {
        Self {
            default_timeout: 5.0,
            default_pixel_size: 32,
            fallback_character: '?',
            reference_pixel_size: REFERENCE_PIXEL_SIZE,
        }
    }
}

impl Config for FontSystemConfig {}

impl FontSystemConfig {
    /// Default request timeout as a duration
    ///
    /// Negative or non-finite values are treated as zero.
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f32(self.default_timeout).unwrap_or(Duration::ZERO)
    }

    /// Set the default timeout in seconds
    pub fn with_timeout(mut self, seconds: f32) -> Self {
        self.default_timeout = seconds;
        self
    }

    /// Set the default pixel size
    pub fn with_pixel_size(mut self, pixel_size: u32) -> Self {
        self.default_pixel_size = pixel_size;
        self
    }

    /// Set the fallback character
    pub fn with_fallback(mut self, character: char) -> Self {
        self.fallback_character = character;
        self
    }
}
