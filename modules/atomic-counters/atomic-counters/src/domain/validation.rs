//! Synchronous request validation.

use atomic_counters_sdk::{CommandRequest, CounterCommand};

use super::error::DomainError;

/// Parameter names reported by `DomainError::MissingParameter`.
pub struct RequestParams;

impl RequestParams {
    pub const KEY: &'static str = "key";
    pub const DELTA: &'static str = "delta";
}

/// A request whose mandatory parameters are known to be present.
///
/// Only `validate` constructs it, so holding one proves validation passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    command: CounterCommand,
    key: String,
    delta: i64,
    initial: Option<i64>,
}

impl ValidatedRequest {
    #[must_use]
    pub fn command(&self) -> CounterCommand {
        self.command
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn delta(&self) -> i64 {
        self.delta
    }

    #[must_use]
    pub fn initial(&self) -> Option<i64> {
        self.initial
    }
}

/// Checks that `key` and then `delta` are present.
///
/// `key` is always checked first, so a request missing both reports `key`.
///
/// # Errors
/// Returns `DomainError::MissingParameter` naming the first absent parameter.
pub fn validate(req: &CommandRequest) -> Result<ValidatedRequest, DomainError> {
    let Some(key) = req.key() else {
        return Err(DomainError::missing_parameter(RequestParams::KEY));
    };
    let Some(delta) = req.delta() else {
        return Err(DomainError::missing_parameter(RequestParams::DELTA));
    };

    Ok(ValidatedRequest {
        command: req.command(),
        key: key.to_owned(),
        delta,
        initial: req.initial(),
    })
}
