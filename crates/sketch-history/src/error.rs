#![forbid(unsafe_code)]

//! History error types.

use std::fmt;

use thiserror::Error;

/// Which of the session's two buffers an operation targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackKind {
    Undo,
    Redo,
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Undo => "undo",
            Self::Redo => "redo",
        })
    }
}

/// Errors from history buffer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Restore was attempted on a buffer with no live snapshots.
    ///
    /// Session verbs check availability first, so this indicates a caller
    /// bug. Nothing has been modified when it is returned.
    #[error("{stack} stack underflow: restore from an empty buffer")]
    Underflow { stack: StackKind },
}

/// Errors loading or validating a [`HistoryConfig`](crate::HistoryConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading a file.
    #[error("failed to read history config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "history-config")]
    #[error("invalid TOML history config: {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "history-config")]
    #[error("invalid JSON history config: {0}")]
    Json(#[from] serde_json::Error),
    /// Values parsed but out of range.
    #[error("history config rejected: {}", .0.join("; "))]
    Validation(Vec<String>),
}
