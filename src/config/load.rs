//! Loading configurations from TOML

use std::path::Path;

use thiserror::Error;

use super::WidgetConfiguration;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse configuration TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

impl WidgetConfiguration {
    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a configuration from a TOML string
    ///
    /// Missing fields keep their defaults.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize the configuration back to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
