//! Error types for audit operations

use std::io;
use thiserror::Error;

/// Result type for audit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while persisting or reading audit data
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Archive entry is invalid or corrupted
    #[error("Invalid archive entry at line {line}: {reason}")]
    InvalidEntry { line: usize, reason: String },

    /// Unknown status label
    #[error("Invalid drift status: {0}")]
    InvalidStatus(String),
}

impl Error {
    /// Create an invalid entry error
    pub fn invalid_entry(line: usize, reason: &str) -> Self {
        Error::InvalidEntry {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an invalid status error
    pub fn invalid_status<S: Into<String>>(label: S) -> Self {
        Error::InvalidStatus(label.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_entry_error() {
        let err = Error::invalid_entry(42, "malformed JSON");
        assert!(matches!(err, Error::InvalidEntry { .. }));
        let msg = err.to_string();
        assert!(msg.contains("42"));
        assert!(msg.contains("malformed JSON"));
    }

    #[test]
    fn test_invalid_status_error() {
        let err = Error::invalid_status("MAYBE");
        assert!(matches!(err, Error::InvalidStatus(_)));
        assert!(err.to_string().contains("MAYBE"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("read-only"));
    }
}
