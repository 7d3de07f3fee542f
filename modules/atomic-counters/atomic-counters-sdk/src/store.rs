//! Counter storage contract consumed by the module.
//!
//! Creation, persistence and cross-node consistency of counters belong to the
//! implementor. The module only requires that `add_and_get` calls against one
//! key are linearized.

use std::sync::Arc;

/// A named atomic integer counter owned by a `CounterStore`.
pub trait CounterHandle: Send + Sync {
    /// Key the counter was resolved with.
    fn key(&self) -> &str;

    /// Reads the current value.
    ///
    /// # Errors
    /// Returns a store-defined error when the value cannot be read.
    fn get(&self) -> anyhow::Result<i64>;

    /// Atomically adds `delta` and returns the updated value.
    ///
    /// # Errors
    /// Returns a store-defined error when the update cannot be applied.
    fn add_and_get(&self, delta: i64) -> anyhow::Result<i64>;
}

/// Source of named counters.
pub trait CounterStore: Send + Sync {
    /// Returns the counter named `key`, creating it with `initial` if absent.
    ///
    /// An existing counter is returned untouched; `initial` is ignored then.
    ///
    /// # Errors
    /// Returns a store-defined error (e.g. storage unavailable).
    fn get_or_create(&self, key: &str, initial: i64) -> anyhow::Result<Arc<dyn CounterHandle>>;
}
