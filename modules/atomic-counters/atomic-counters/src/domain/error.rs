//! Domain error types for the atomic-counters module.

use atomic_counters_sdk::AtomicCountersError;
use thiserror::Error;

/// Domain-level errors for counter commands.
#[derive(Error, Debug)]
pub enum DomainError {
    /// A mandatory request parameter was absent. Raised before any work is scheduled.
    #[error("Failed to find mandatory parameter in request: {parameter}")]
    MissingParameter { parameter: &'static str },

    /// Resolving or updating the counter failed on the execution context.
    #[error("Failed to execute counter operation: {0:#}")]
    Execution(#[source] anyhow::Error),

    /// The settled value could not be serialized into the response payload.
    #[error("Failed to serialize response payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DomainError {
    /// Creates a `MissingParameter` error.
    #[must_use]
    pub fn missing_parameter(parameter: &'static str) -> Self {
        Self::MissingParameter { parameter }
    }

    /// Creates an `Execution` error from any cause.
    #[must_use]
    pub fn execution(cause: impl Into<anyhow::Error>) -> Self {
        Self::Execution(cause.into())
    }
}

impl From<DomainError> for AtomicCountersError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::MissingParameter { parameter } => {
                AtomicCountersError::missing_parameter(parameter)
            }
            DomainError::Execution(cause) => AtomicCountersError::execution(format!("{cause:#}")),
            DomainError::Serialization(e) => AtomicCountersError::internal(e.to_string()),
        }
    }
}
