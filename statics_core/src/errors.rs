//! # Error Types
//!
//! Structured error types for statics_core. Every failure is a deterministic
//! problem with the input, so nothing here is retryable; callers surface the
//! error to the user and discard the analysis.
//!
//! ## Example
//!
//! ```rust
//! use statics_core::errors::{StaticsError, StaticsResult};
//!
//! fn validate_length(length_m: f64) -> StaticsResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(StaticsError::InvalidInput {
//!             field: "length_m".to_string(),
//!             value: length_m.to_string(),
//!             reason: "Beam length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for statics_core operations
pub type StaticsResult<T> = Result<T, StaticsError>;

/// Structured error type for beam analysis operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum StaticsError {
    /// The beam is not a two-support simply-supported beam
    #[error("Unsupported configuration: {support_count} support(s) - {reason}")]
    UnsupportedConfiguration {
        support_count: usize,
        reason: String,
    },

    /// An input value is invalid (out of range, non-finite, inverted span, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl StaticsError {
    /// Create an UnsupportedConfiguration error
    pub fn unsupported_configuration(support_count: usize, reason: impl Into<String>) -> Self {
        StaticsError::UnsupportedConfiguration {
            support_count,
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        StaticsError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        StaticsError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        StaticsError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            StaticsError::UnsupportedConfiguration { .. } => "UNSUPPORTED_CONFIGURATION",
            StaticsError::InvalidInput { .. } => "INVALID_INPUT",
            StaticsError::FileError { .. } => "FILE_ERROR",
            StaticsError::SerializationError { .. } => "SERIALIZATION_ERROR",
            StaticsError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for StaticsError {
    fn from(e: serde_json::Error) -> Self {
        StaticsError::serialization(e.to_string())
    }
}
