//! Custom error types for intent-signal
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for intent-signal operations
#[derive(Error, Debug)]
pub enum SignalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors (e.g. an empty unlock selection)
    #[error("Validation error: {0}")]
    Validation(String),

    /// An identifier outside the unlock option catalog
    #[error("Unknown unlock option: {0}")]
    UnknownOption(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SignalError {
    /// Create a "not found" error for signals
    pub fn signal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Signal",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SignalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SignalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for intent-signal operations
pub type SignalResult<T> = Result<T, SignalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SignalError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_unknown_option_display() {
        let err = SignalError::UnknownOption("weak".into());
        assert_eq!(err.to_string(), "Unknown unlock option: weak");
    }

    #[test]
    fn test_not_found_error() {
        let err = SignalError::signal_not_found("sig-042");
        assert_eq!(err.to_string(), "Signal not found: sig-042");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let signal_err: SignalError = io_err.into();
        assert!(matches!(signal_err, SignalError::Io(_)));
    }
}
