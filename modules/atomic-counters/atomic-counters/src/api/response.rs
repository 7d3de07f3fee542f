//! Generic response composition shared by command handlers.

use std::future::Future;

use atomic_counters_sdk::ResponseEnvelope;
use serde::Serialize;

use crate::domain::DomainError;

/// Turns the settlement of `op` into a response envelope.
///
/// A successful value of any serializable type becomes the envelope payload.
/// A failure is returned unchanged so the transport boundary can render it.
///
/// # Errors
/// Propagates the failure `op` settled with, or `DomainError::Serialization`
/// when the value cannot be encoded.
pub async fn wrap<T, F>(op: F) -> Result<ResponseEnvelope, DomainError>
where
    T: Serialize,
    F: Future<Output = Result<T, DomainError>>,
{
    let value = op.await?;
    let payload = serde_json::to_value(&value)?;
    Ok(ResponseEnvelope::success(payload))
}
