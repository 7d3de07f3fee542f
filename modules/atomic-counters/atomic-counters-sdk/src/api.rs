//! `AtomicCountersClient` trait definition.

use async_trait::async_trait;

use crate::error::AtomicCountersError;

/// Public API trait for the `atomic-counters` module.
///
/// In-process consumers use it instead of building `CommandRequest`s by hand.
/// Both methods create the counter with `initial` (or the module's default)
/// when it does not exist yet.
#[async_trait]
pub trait AtomicCountersClient: Send + Sync {
    /// Adds `delta` to the counter named `key` and returns the new value.
    ///
    /// # Errors
    ///
    /// * `Execution` - If the counter store failed to resolve or update the counter
    async fn increment(
        &self,
        key: &str,
        delta: i64,
        initial: Option<i64>,
    ) -> Result<i64, AtomicCountersError>;

    /// Subtracts `delta` from the counter named `key` and returns the new value.
    ///
    /// # Errors
    ///
    /// * `Execution` - If the counter store failed to resolve or update the counter
    async fn decrement(
        &self,
        key: &str,
        delta: i64,
        initial: Option<i64>,
    ) -> Result<i64, AtomicCountersError>;
}
