//! Error types for DeskBooker.
//!
//! Errors are strongly typed using thiserror so callers can match on
//! the specific condition instead of parsing messages.

use thiserror::Error;

use crate::storage::StorageError;

/// Validation errors raised before any storage collaborator is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was never set.
    #[error("Required field '{field}' is missing")]
    MissingField {
        /// Field name.
        field: String,
    },

    /// A field is empty or whitespace only.
    #[error("Field '{field}' cannot be empty")]
    EmptyField {
        /// Field name.
        field: String,
    },

    /// A field is longer than the configured limit.
    #[error("Field '{field}' exceeds maximum length of {max_length}")]
    FieldTooLong {
        /// Field name.
        field: String,
        /// Limit in characters.
        max_length: usize,
    },

    /// The email address is malformed.
    #[error("'{email}' is not a valid email address")]
    InvalidEmail {
        /// The rejected address, as given.
        email: String,
    },

    /// The processor configuration is unusable.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with it.
        reason: String,
    },
}

/// Execution errors that occur while a request is being processed.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// A repository call failed.
    #[error("Storage error: {message}")]
    Storage {
        /// Backend error message.
        message: String,
    },
}

/// Top-level error type for DeskBooker.
#[derive(Debug, Error)]
pub enum DeskBookerError {
    /// The request or configuration was rejected.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Processing failed after validation.
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// Unexpected internal state.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the failure.
        message: String,
    },
}

impl DeskBookerError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is an execution error.
    #[must_use]
    pub const fn is_execution(&self) -> bool {
        matches!(self, Self::Execution(_))
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

impl From<StorageError> for DeskBookerError {
    fn from(err: StorageError) -> Self {
        Self::Execution(ExecutionError::Storage {
            message: err.to_string(),
        })
    }
}

/// Result type alias for DeskBooker operations.
pub type DeskBookerResult<T> = Result<T, DeskBookerError>;
