//! Domain service that applies validated counter commands.

use std::sync::Arc;

use atomic_counters_sdk::{CounterCommand, CounterStore};
use tracing::{Span, debug, instrument};

use super::executor::{ExecutionContext, ExecutionContextExt};
use super::pending::PendingOperation;
use super::validation::ValidatedRequest;

/// Resolves counters and applies signed deltas on an execution context.
///
/// Holds no per-request state; concurrent updates of one key are linearized
/// by the counter store.
pub struct CounterDispatcher {
    store: Arc<dyn CounterStore>,
    executor: Arc<dyn ExecutionContext>,
    default_initial: i64,
}

impl CounterDispatcher {
    /// Creates a dispatcher that creates missing counters at zero.
    #[must_use]
    pub fn new(store: Arc<dyn CounterStore>, executor: Arc<dyn ExecutionContext>) -> Self {
        Self {
            store,
            executor,
            default_initial: 0,
        }
    }

    /// Sets the value used for new counters when a request carries no initial value.
    #[must_use]
    pub fn with_default_initial(mut self, default_initial: i64) -> Self {
        self.default_initial = default_initial;
        self
    }

    /// Submits the resolve-and-add sequence for `req` and returns immediately.
    ///
    /// The returned operation settles with the counter's value after the update,
    /// or with `DomainError::Execution` if the store failed. No retries.
    #[instrument(
        name = "atomic_counters.dispatch",
        skip(self, req),
        fields(command = %req.command(), key = req.key())
    )]
    pub fn dispatch(&self, req: ValidatedRequest) -> PendingOperation<i64> {
        let store = Arc::clone(&self.store);
        let default_initial = self.default_initial;
        let span = Span::current();

        debug!(executor = self.executor.name(), "submitting counter update");
        self.executor
            .submit(move || span.in_scope(|| apply(store.as_ref(), &req, default_initial)))
    }
}

/// Sign of the delta is taken from the command when the work runs.
fn signed_delta(command: CounterCommand, delta: i64) -> i64 {
    match command {
        CounterCommand::Increment => delta,
        CounterCommand::Decrement => delta.wrapping_neg(),
    }
}

fn apply(
    store: &dyn CounterStore,
    req: &ValidatedRequest,
    default_initial: i64,
) -> anyhow::Result<i64> {
    let initial = req.initial().unwrap_or(default_initial);
    let counter = store.get_or_create(req.key(), initial)?;

    let delta = signed_delta(req.command(), req.delta());
    let value = counter.add_and_get(delta)?;

    debug!(delta, value, "counter updated");
    Ok(value)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::executor::InlineExecutor;
    use crate::domain::validation::validate;
    use crate::infra::storage::InMemoryCounterStore;
    use atomic_counters_sdk::{CommandRequest, CounterHandle};

    fn request(command: CounterCommand, key: &str, delta: i64) -> CommandRequest {
        CommandRequest::new(command).with_key(key).with_delta(delta)
    }

    fn dispatcher(store: Arc<InMemoryCounterStore>) -> CounterDispatcher {
        CounterDispatcher::new(store, Arc::new(InlineExecutor))
    }

    #[test]
    fn signed_delta_follows_command() {
        assert_eq!(signed_delta(CounterCommand::Increment, 5), 5);
        assert_eq!(signed_delta(CounterCommand::Decrement, 5), -5);
        assert_eq!(signed_delta(CounterCommand::Decrement, -5), 5);
        assert_eq!(signed_delta(CounterCommand::Decrement, i64::MIN), i64::MIN);
    }

    #[tokio::test]
    async fn increments_then_decrements_new_counter() {
        let store = Arc::new(InMemoryCounterStore::new());
        let dispatcher = dispatcher(Arc::clone(&store));

        let req = validate(&request(CounterCommand::Increment, "hits", 3).with_initial(10)).unwrap();
        assert_eq!(dispatcher.dispatch(req).await.unwrap(), 13);

        let req = validate(&request(CounterCommand::Decrement, "hits", 5)).unwrap();
        assert_eq!(dispatcher.dispatch(req).await.unwrap(), 8);
    }

    #[tokio::test]
    async fn existing_counter_ignores_requested_initial() {
        let store = Arc::new(InMemoryCounterStore::new());
        let dispatcher = dispatcher(Arc::clone(&store));

        let req = validate(&request(CounterCommand::Increment, "k", 1).with_initial(100)).unwrap();
        assert_eq!(dispatcher.dispatch(req).await.unwrap(), 101);

        let req = validate(&request(CounterCommand::Increment, "k", 1).with_initial(-50)).unwrap();
        assert_eq!(dispatcher.dispatch(req).await.unwrap(), 102);
    }

    #[tokio::test]
    async fn missing_initial_uses_configured_default() {
        let store = Arc::new(InMemoryCounterStore::new());
        let dispatcher = dispatcher(Arc::clone(&store)).with_default_initial(1000);

        let req = validate(&request(CounterCommand::Decrement, "stock", 1)).unwrap();
        assert_eq!(dispatcher.dispatch(req).await.unwrap(), 999);
    }

    #[tokio::test]
    async fn missing_initial_defaults_to_zero() {
        let store = Arc::new(InMemoryCounterStore::new());
        let dispatcher = dispatcher(Arc::clone(&store));

        let req = validate(&request(CounterCommand::Decrement, "fresh", 2)).unwrap();
        assert_eq!(dispatcher.dispatch(req).await.unwrap(), -2);
        assert_eq!(store.get_or_create("fresh", 0).unwrap().get().unwrap(), -2);
    }

    #[tokio::test]
    async fn store_failure_settles_as_execution_error() {
        struct DownStore;

        impl CounterStore for DownStore {
            fn get_or_create(
                &self,
                _key: &str,
                _initial: i64,
            ) -> anyhow::Result<Arc<dyn CounterHandle>> {
                anyhow::bail!("storage unavailable")
            }
        }

        let dispatcher = CounterDispatcher::new(Arc::new(DownStore), Arc::new(InlineExecutor));
        let req = validate(&request(CounterCommand::Increment, "k", 1)).unwrap();

        match dispatcher.dispatch(req).await {
            Err(DomainError::Execution(cause)) => assert_eq!(cause.to_string(), "storage unavailable"),
            other => panic!("expected execution failure, got {other:?}"),
        }
    }
}
