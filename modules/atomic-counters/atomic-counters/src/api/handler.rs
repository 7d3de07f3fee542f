//! Command handler exposed to the command routing layer.

use std::sync::Arc;

use atomic_counters_sdk::{CommandRequest, CounterCommand, ResponseEnvelope};
use futures::FutureExt;
use futures::future::{self, BoxFuture};

use super::envelope::render_envelope;
use super::response::wrap;
use crate::domain::{CounterDispatcher, DomainError, validate};

/// Future returned by `CommandHandler::handle`.
pub type HandlerFuture = BoxFuture<'static, Result<ResponseEnvelope, DomainError>>;

/// A handler serving a fixed set of counter commands.
///
/// The routing layer looks up a handler by `supported_commands` and only
/// passes it requests carrying one of those commands.
pub trait CommandHandler: Send + Sync {
    /// Commands this handler serves.
    fn supported_commands(&self) -> &'static [CounterCommand];

    /// Validates `req` on the calling thread and schedules it.
    ///
    /// Never blocks: a rejected request yields an already-settled future and
    /// an accepted one yields the future of its response envelope.
    fn handle(&self, req: CommandRequest) -> HandlerFuture;

    /// Like `handle`, but renders failures into the envelope.
    fn handle_enveloped(&self, req: CommandRequest) -> BoxFuture<'static, ResponseEnvelope> {
        self.handle(req).map(render_envelope).boxed()
    }
}

/// Serves `incr` and `decr` against a counter store.
pub struct CounterCommandHandler {
    dispatcher: Arc<CounterDispatcher>,
}

impl CounterCommandHandler {
    #[must_use]
    pub fn new(dispatcher: Arc<CounterDispatcher>) -> Self {
        Self { dispatcher }
    }
}

impl CommandHandler for CounterCommandHandler {
    fn supported_commands(&self) -> &'static [CounterCommand] {
        &CounterCommand::ALL
    }

    fn handle(&self, req: CommandRequest) -> HandlerFuture {
        match validate(&req) {
            Ok(valid) => wrap(self.dispatcher.dispatch(valid)).boxed(),
            // Logged once, where the failure is rendered.
            Err(e) => future::ready(Err(e)).boxed(),
        }
    }
}
