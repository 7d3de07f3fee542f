//! Infrastructure layer for the atomic-counters module.

pub mod storage;

pub use storage::InMemoryCounterStore;
