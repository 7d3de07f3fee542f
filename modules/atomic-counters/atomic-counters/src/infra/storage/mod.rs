//! Storage implementations for the atomic-counters module.

pub mod in_memory_store;

pub use in_memory_store::{InMemoryCounter, InMemoryCounterStore};
