//! Error types for sentinel operations

use std::io;
use thiserror::Error;

/// Result type for sentinel operations
pub type Result<T> = std::result::Result<T, SentinelError>;

/// Errors surfaced by the sentinel and its vector utilities
#[derive(Error, Debug)]
pub enum SentinelError {
    /// Normalization attempted on a zero-magnitude vector
    #[error("Degenerate vector: zero magnitude has no direction")]
    DegenerateVector,

    /// Observed vector length differs from the origin
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Policy values out of range
    #[error("Invalid sentinel policy: {0}")]
    InvalidPolicy(String),

    /// Report or archive write failed
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Audit persistence failed for a non-I/O reason
    #[error("Audit error: {0}")]
    Audit(liora_audit::Error),
}

impl From<liora_audit::Error> for SentinelError {
    fn from(err: liora_audit::Error) -> Self {
        match err {
            liora_audit::Error::Io(io_err) => SentinelError::Io(io_err),
            other => SentinelError::Audit(other),
        }
    }
}

impl SentinelError {
    /// Create an invalid policy error
    pub fn invalid_policy<S: Into<String>>(message: S) -> Self {
        SentinelError::InvalidPolicy(message.into())
    }
}
