//! Error types for the atomic-counters module.

use thiserror::Error;

/// Errors returned by `AtomicCountersClient` methods.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AtomicCountersError {
    /// A mandatory request parameter was absent.
    #[error("missing parameter: {parameter}")]
    MissingParameter { parameter: String },

    /// Resolving or updating the counter failed.
    #[error("counter operation failed: {0}")]
    Execution(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AtomicCountersError {
    /// Creates a `MissingParameter` error.
    #[must_use]
    pub fn missing_parameter(parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            parameter: parameter.into(),
        }
    }

    /// Creates an `Execution` error.
    #[must_use]
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution(message.into())
    }

    /// Creates an `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
