//! API layer for the atomic-counters module: the command handler exposed to
//! the routing layer and the response composition it relies on.

pub mod envelope;
pub mod handler;
pub mod response;

pub use envelope::{domain_error_to_error_info, render_envelope};
pub use handler::{CommandHandler, CounterCommandHandler, HandlerFuture};
pub use response::wrap;
