//! Atomic Counters SDK
//!
//! This crate provides the public contract of the `atomic-counters` module:
//! - `CounterCommand` and `CommandRequest` models decoded by the transport
//! - `ResponseEnvelope` returned to clients for every command
//! - `CounterStore` / `CounterHandle` traits the module consumes for storage
//! - `AtomicCountersClient` trait for in-process consumers
//! - `AtomicCountersError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use atomic_counters_sdk::AtomicCountersClient;
//!
//! let value = client.increment("visits", 1, Some(100)).await?;
//! let value = client.decrement("visits", 5, None).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod envelope;
pub mod error;
pub mod models;
pub mod store;

// Re-export main types at crate root for convenience
pub use api::AtomicCountersClient;
pub use envelope::{ErrorCode, ErrorInfo, ResponseEnvelope};
pub use error::AtomicCountersError;
pub use models::{CommandRequest, CounterCommand, UnknownCommand};
pub use store::{CounterHandle, CounterStore};
