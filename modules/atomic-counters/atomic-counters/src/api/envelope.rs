//! Rendering of domain errors into the `ErrorInfo` carried by failed envelopes.

use atomic_counters_sdk::{ErrorCode, ErrorInfo, ResponseEnvelope};

use crate::domain::DomainError;

/// Map a domain error to the structured error carried by a failed envelope
pub fn domain_error_to_error_info(e: &DomainError) -> ErrorInfo {
    match e {
        DomainError::MissingParameter { parameter } => {
            tracing::warn!(parameter, "Rejected counter command: missing parameter");
            ErrorInfo::new(ErrorCode::MissingParameter, "Missing Parameter", e.to_string())
                .with_parameter(*parameter)
        }
        DomainError::Execution(cause) => {
            tracing::error!(error = %format!("{cause:#}"), "Counter operation failed");
            ErrorInfo::new(ErrorCode::ExecutionFailed, "Execution Failed", e.to_string())
        }
        DomainError::Serialization(err) => {
            tracing::error!(error = %err, "Failed to serialize counter response");
            ErrorInfo::new(
                ErrorCode::SerializationFailed,
                "Serialization Failed",
                e.to_string(),
            )
        }
    }
}

/// Collapse a handler outcome into a single envelope, rendering failures
pub fn render_envelope(outcome: Result<ResponseEnvelope, DomainError>) -> ResponseEnvelope {
    match outcome {
        Ok(envelope) => envelope,
        Err(e) => ResponseEnvelope::failure(domain_error_to_error_info(&e)),
    }
}

impl From<&DomainError> for ErrorInfo {
    fn from(e: &DomainError) -> Self {
        domain_error_to_error_info(e)
    }
}
