//! Persisted player preferences
//!
//! Stored as TOML with the same key names and string encodings the web
//! version kept in cookies:
//!
//! ```toml
//! dark-mode-flag = "1"
//! preferred-word-length = "5"
//! ```

use crate::core::MAX_WORD_LENGTH;
use crate::error::PrefsError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;

/// Default preferences file, relative to the working directory
pub const DEFAULT_PREFS_FILE: &str = "letritas.toml";

/// Word length used before the player picks one
pub const DEFAULT_WORD_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    #[serde(rename = "dark-mode-flag", with = "flag")]
    pub dark_mode: bool,
    #[serde(rename = "preferred-word-length", with = "number")]
    pub word_length: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            dark_mode: false,
            word_length: DEFAULT_WORD_LENGTH,
        }
    }
}

impl Preferences {
    /// Load preferences from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or holds
    /// an out-of-range value.
    pub fn load(path: &Path) -> Result<Self, PrefsError> {
        let content = std::fs::read_to_string(path).map_err(|e| PrefsError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let prefs: Preferences = toml::from_str(&content)?;
        prefs.validate()?;
        Ok(prefs)
    }

    /// Load preferences from a TOML file, falling back to defaults if the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be loaded.
    pub fn load_or_default(path: &Path) -> Result<Self, PrefsError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!(
                "Preferences file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Write preferences to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is out of range or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), PrefsError> {
        self.validate()?;
        let content = toml::to_string(self)?;
        std::fs::write(path, content).map_err(|e| PrefsError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validate that all values are within acceptable ranges.
    ///
    /// # Errors
    ///
    /// Returns `PrefsError::Validation` if the word length is outside `1..=MAX_WORD_LENGTH`.
    pub fn validate(&self) -> Result<(), PrefsError> {
        if !(1..=MAX_WORD_LENGTH).contains(&self.word_length) {
            return Err(PrefsError::Validation(format!(
                "word length must be between 1 and {MAX_WORD_LENGTH}"
            )));
        }
        Ok(())
    }
}

/// `bool` stored as `"0"` / `"1"`
mod flag {
    use super::{Deserialize, Deserializer, Serializer};
    use serde::de::Error;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "1" } else { "0" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match String::deserialize(deserializer)?.trim() {
            "1" => Ok(true),
            "0" => Ok(false),
            other => Err(D::Error::custom(format!(
                "expected \"0\" or \"1\", got \"{other}\""
            ))),
        }
    }
}

/// `usize` stored as a decimal string
mod number {
    use super::{Deserialize, Deserializer, Serializer};
    use serde::de::Error;

    pub fn serialize<S: Serializer>(value: &usize, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.trim().parse().map_err(D::Error::custom)
    }
}
