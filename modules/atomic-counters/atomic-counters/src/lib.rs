//! Atomic Counters Module
//!
//! Handles the `incr` and `decr` commands over named 64-bit counters.
//!
//! A request is validated on the calling thread; the counter is then resolved
//! (created with the request's initial value if missing) and updated on an
//! execution context, and the new value comes back inside a
//! `ResponseEnvelope`.
//!
//! ## Usage
//!
//! ```ignore
//! let module = AtomicCountersModule::new(config, Arc::new(InMemoryCounterStore::new()))?;
//! let env = module
//!     .handler()
//!     .handle(CommandRequest::new(CounterCommand::Increment).with_key("hits").with_delta(1))
//!     .await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === PUBLIC API (from SDK) ===
pub use atomic_counters_sdk::{
    AtomicCountersClient, AtomicCountersError, CommandRequest, CounterCommand, CounterHandle,
    CounterStore, ErrorCode, ErrorInfo, ResponseEnvelope,
};

// === MODULE DEFINITION ===
pub mod local_client;
pub mod module;
pub use module::{AtomicCountersModule, MODULE_NAME};

// === CONFIGURATION ===
pub mod config;
pub mod telemetry;
pub use config::{AtomicCountersConfig, ExecutorKind};

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
