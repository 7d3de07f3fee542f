//! Domain layer for the atomic-counters module.
//!
//! Validation, dispatch of counter updates onto an execution context, and the
//! pending operations that carry their outcome.

pub mod error;
pub mod executor;
pub mod pending;
pub mod service;
pub mod validation;

pub use error::DomainError;
pub use executor::{BlockingPoolExecutor, ExecutionContext, ExecutionContextExt, InlineExecutor, Job};
pub use pending::PendingOperation;
pub use service::CounterDispatcher;
pub use validation::{RequestParams, ValidatedRequest, validate};
