//! Localized UI message lookup
//!
//! The catalog is loaded once at startup and passed explicitly to whatever
//! component needs user-facing strings; there is no global registry to
//! reach through.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading a message catalog
#[derive(Debug, Error)]
pub enum MessageError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Key-to-string table for UI messages, deserialized from a TOML file
///
/// ```toml
/// [messages]
/// obstacle_hit = "Blocked by {material}"
/// no_target = "Nothing in sight"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageCatalog {
    #[serde(default)]
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// Load a catalog from a TOML file.
    ///
    /// # Errors
    /// Returns [`MessageError`] if the file cannot be read or parsed.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, MessageError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse a catalog from TOML text.
    ///
    /// # Errors
    /// Returns [`MessageError::Parse`] on malformed TOML.
    pub fn from_toml_str(contents: &str) -> Result<Self, MessageError> {
        Ok(toml::from_str(contents)?)
    }

    /// Look up a localized string by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Number of entries in the catalog
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the catalog holds no entries
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
