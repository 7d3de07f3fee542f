//! Uniform response envelope returned for every command.
//!
//! Failures are described with `ErrorInfo`, a trimmed-down RFC 9457 problem
//! detail: a stable machine-readable code, a short title and a detail message.

use serde::{Deserialize, Serialize};

/// Machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A mandatory request parameter was absent.
    MissingParameter,
    /// Resolving or updating the counter failed.
    ExecutionFailed,
    /// The result could not be encoded into the envelope.
    SerializationFailed,
}

/// Structured failure description carried by a failed envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ErrorInfo {
    pub code: ErrorCode,
    /// A short, human-readable summary of the failure category.
    pub title: String,
    /// A human-readable explanation specific to this occurrence.
    pub detail: String,
    /// Name of the missing parameter, for `MissingParameter` failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

impl ErrorInfo {
    pub fn new(code: ErrorCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code,
            title: title.into(),
            detail: detail.into(),
            parameter: None,
        }
    }

    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }
}

/// Outward-facing result of a command: exactly one of a payload or an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResponseEnvelope {
    Success { payload: serde_json::Value },
    Failure { error: ErrorInfo },
}

impl ResponseEnvelope {
    #[must_use]
    pub fn success(payload: serde_json::Value) -> Self {
        Self::Success { payload }
    }

    #[must_use]
    pub fn failure(error: ErrorInfo) -> Self {
        Self::Failure { error }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[must_use]
    pub fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Success { payload } => Some(payload),
            Self::Failure { .. } => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }
}
