//! # Configuration
//!
//! Optional TOML file selected with `--config`:
//!
//! ```toml
//! [contacts]
//! whatsapp_number = "5511999999999"
//! email_address = "avaliacao@xconcept.com.br"
//!
//! [display]
//! date_format = "%d/%m/%Y"
//! ```
//!
//! Every key has a default, so an empty file (or no file) is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;
use xconcept_core::{Contacts, DateStyle, XconceptError};

/// Maximum configuration file size (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

/// Effective application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Recipients of the two delivery channels.
    pub contacts: Contacts,
    /// Presentation settings.
    pub display: DisplayConfig,
}

/// `[display]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// strftime pattern used for the start and review dates.
    pub date_format: DateStyle,
}

impl AppConfig {
    /// Load from `path`, or return the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, XconceptError> {
        let Some(path) = path else {
            tracing::debug!("No configuration file, using defaults");
            return Ok(Self::default());
        };

        let metadata = std::fs::metadata(path).map_err(|e| {
            XconceptError::ConfigError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(XconceptError::ConfigError(format!(
                "Configuration file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            XconceptError::ConfigError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, XconceptError> {
        toml::from_str(content).map_err(|e| XconceptError::ConfigError(e.to_string()))
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, XconceptError> {
        toml::to_string(self).map_err(|e| XconceptError::SerializationError(e.to_string()))
    }
}
