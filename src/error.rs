/*!
 * Error types for Liora
 */

use std::fmt;
use std::io;
use std::path::PathBuf;

use liora_sentinel::SentinelError;

pub type Result<T> = std::result::Result<T, LioraError>;

/// Exit code constants for structured process exit
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_FATAL: i32 = 2;

#[derive(Debug)]
pub enum LioraError {
    /// Sentinel rejected a vector or policy, or failed to write
    Sentinel(SentinelError),

    /// I/O error outside the sentinel (config, log file)
    Io(io::Error),

    /// Configuration file could not be read or parsed
    ConfigFile { path: PathBuf, reason: String },

    /// Configuration values out of range
    Config(String),

    /// Logging could not be initialised
    Logging(String),
}

impl LioraError {
    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // Bad input or setup: nothing was observed
            LioraError::Config(_) | LioraError::ConfigFile { .. } | LioraError::Logging(_) => {
                EXIT_FATAL
            }
            LioraError::Sentinel(SentinelError::DegenerateVector)
            | LioraError::Sentinel(SentinelError::DimensionMismatch { .. })
            | LioraError::Sentinel(SentinelError::InvalidPolicy(_)) => EXIT_FATAL,
            // Observation ran but output could not be persisted
            LioraError::Sentinel(_) | LioraError::Io(_) => EXIT_FAILURE,
        }
    }

    /// Check if this error comes from a bad input vector
    pub fn is_vector_error(&self) -> bool {
        matches!(
            self,
            LioraError::Sentinel(SentinelError::DegenerateVector)
                | LioraError::Sentinel(SentinelError::DimensionMismatch { .. })
        )
    }
}

impl fmt::Display for LioraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LioraError::Sentinel(err) => {
                write!(f, "Sentinel error: {}", err)
            }
            LioraError::Io(err) => {
                write!(f, "I/O error: {}", err)
            }
            LioraError::ConfigFile { path, reason } => {
                write!(
                    f,
                    "Failed to load config file {}: {}",
                    path.display(),
                    reason
                )
            }
            LioraError::Config(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
            LioraError::Logging(msg) => {
                write!(f, "Logging error: {}", msg)
            }
        }
    }
}

impl std::error::Error for LioraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LioraError::Sentinel(err) => Some(err),
            LioraError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SentinelError> for LioraError {
    fn from(err: SentinelError) -> Self {
        LioraError::Sentinel(err)
    }
}

impl From<io::Error> for LioraError {
    fn from(err: io::Error) -> Self {
        LioraError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_errors() {
        assert_eq!(
            LioraError::Sentinel(SentinelError::DegenerateVector).exit_code(),
            EXIT_FATAL
        );
        assert_eq!(LioraError::Config("bad".to_string()).exit_code(), EXIT_FATAL);
        assert_eq!(
            LioraError::ConfigFile {
                path: PathBuf::from("liora.toml"),
                reason: "missing".to_string(),
            }
            .exit_code(),
            EXIT_FATAL
        );
    }

    #[test]
    fn test_write_failures_are_not_fatal() {
        let err: LioraError = SentinelError::Io(io::Error::other("disk full")).into();
        assert_eq!(err.exit_code(), EXIT_FAILURE);
        assert_eq!(LioraError::Io(io::Error::other("x")).exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_vector_error_detection() {
        let err: LioraError = SentinelError::DimensionMismatch {
            expected: 4,
            actual: 2,
        }
        .into();
        assert!(err.is_vector_error());
        assert!(!LioraError::Config("x".to_string()).is_vector_error());
    }

    #[test]
    fn test_error_display() {
        let err = LioraError::ConfigFile {
            path: PathBuf::from("liora.toml"),
            reason: "expected a table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to load config file liora.toml: expected a table"
        );

        let err: LioraError = SentinelError::DegenerateVector.into();
        assert!(err.to_string().starts_with("Sentinel error: Degenerate vector"));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;
        let err: LioraError = SentinelError::DegenerateVector.into();
        assert!(err.source().is_some());
        assert!(LioraError::Config("x".to_string()).source().is_none());
    }
}
