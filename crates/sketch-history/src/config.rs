#![forbid(unsafe_code)]

//! History configuration.
//!
//! # Loading
//!
//! ```toml
//! # sketch-history.toml
//! max_undo = 32
//! ```
//!
//! ```rust,ignore
//! let config = HistoryConfig::from_toml_file("sketch-history.toml")?;
//! let config = HistoryConfig::from_json_str(r#"{ "max_undo": 32 }"#)?;
//! ```
//!
//! Loaders validate before returning, so a loaded config can always be handed
//! to [`UndoStack::new`](crate::UndoStack::new).

#[cfg(feature = "history-config")]
use std::path::Path;

#[cfg(feature = "history-config")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default number of snapshots kept per direction.
pub const DEFAULT_MAX_UNDO: usize = 16;

/// Configuration for an undo session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "history-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "history-config", serde(default))]
pub struct HistoryConfig {
    /// Slots in each of the undo and redo ring buffers.
    /// The oldest snapshot is evicted when a full buffer is pushed.
    pub max_undo: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_undo: DEFAULT_MAX_UNDO,
        }
    }
}

impl HistoryConfig {
    /// Create a configuration with the given capacity.
    #[must_use]
    pub fn new(max_undo: usize) -> Self {
        Self { max_undo }
    }

    /// Validate all parameters.
    ///
    /// Returns a list of problems; empty means the config is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.max_undo == 0 {
            errors.push("max_undo must be at least 1".to_string());
        }
        errors
    }

    /// Validate, turning problems into a [`ConfigError::Validation`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "history-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "history-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "history-config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "history-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity() {
        assert_eq!(HistoryConfig::default().max_undo, DEFAULT_MAX_UNDO);
        assert!(HistoryConfig::default().validate().is_empty());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let errors = HistoryConfig::new(0).validate();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            HistoryConfig::new(0).validated(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[cfg(feature = "history-config")]
    mod loading {
        use super::super::*;
        use std::io::Write;

        #[test]
        fn toml_sets_capacity() {
            let config = HistoryConfig::from_toml_str("max_undo = 4").unwrap();
            assert_eq!(config.max_undo, 4);
        }

        #[test]
        fn toml_missing_field_uses_default() {
            let config = HistoryConfig::from_toml_str("").unwrap();
            assert_eq!(config, HistoryConfig::default());
        }

        #[test]
        fn toml_zero_fails_validation() {
            let err = HistoryConfig::from_toml_str("max_undo = 0").unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)));
        }

        #[test]
        fn toml_type_error() {
            let err = HistoryConfig::from_toml_str("max_undo = \"lots\"").unwrap_err();
            assert!(matches!(err, ConfigError::Toml(_)));
        }

        #[test]
        fn json_str() {
            let config = HistoryConfig::from_json_str(r#"{ "max_undo": 2 }"#).unwrap();
            assert_eq!(config.max_undo, 2);
            assert!(matches!(
                HistoryConfig::from_json_str("{"),
                Err(ConfigError::Json(_))
            ));
        }

        #[test]
        fn files_on_disk() {
            let dir = tempfile::tempdir().unwrap();

            let toml_path = dir.path().join("history.toml");
            let mut f = std::fs::File::create(&toml_path).unwrap();
            writeln!(f, "max_undo = 8").unwrap();
            assert_eq!(HistoryConfig::from_toml_file(&toml_path).unwrap().max_undo, 8);

            let json_path = dir.path().join("history.json");
            std::fs::write(&json_path, r#"{"max_undo": 3}"#).unwrap();
            assert_eq!(HistoryConfig::from_json_file(&json_path).unwrap().max_undo, 3);
        }

        #[test]
        fn missing_file_is_io_error() {
            let dir = tempfile::tempdir().unwrap();
            let err = HistoryConfig::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
            assert!(matches!(err, ConfigError::Io(_)));
        }
    }
}
