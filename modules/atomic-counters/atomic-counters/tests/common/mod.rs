#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for atomic-counters integration tests

use std::collections::HashSet;
use std::sync::Arc;

use atomic_counters::api::{CommandHandler, CounterCommandHandler};
use atomic_counters::domain::{BlockingPoolExecutor, CounterDispatcher, ExecutionContext, InlineExecutor};
use atomic_counters::infra::InMemoryCounterStore;
use atomic_counters::{CommandRequest, CounterCommand, CounterHandle, CounterStore};

/// In-memory store that fails or panics for selected keys.
#[derive(Default)]
pub struct FlakyStore {
    inner: InMemoryCounterStore,
    failing: HashSet<String>,
    panicking: HashSet<String>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `get_or_create` returns an error for `key`.
    pub fn fail_on(mut self, key: &str) -> Self {
        self.failing.insert(key.to_owned());
        self
    }

    /// `get_or_create` panics for `key`.
    pub fn panic_on(mut self, key: &str) -> Self {
        self.panicking.insert(key.to_owned());
        self
    }

    pub fn value(&self, key: &str) -> Option<i64> {
        self.inner.value(key)
    }
}

impl CounterStore for FlakyStore {
    fn get_or_create(&self, key: &str, initial: i64) -> anyhow::Result<Arc<dyn CounterHandle>> {
        if self.failing.contains(key) {
            anyhow::bail!("storage unavailable for '{key}'");
        }
        assert!(!self.panicking.contains(key), "store exploded on '{key}'");
        self.inner.get_or_create(key, initial)
    }
}

pub fn inline() -> Arc<dyn ExecutionContext> {
    Arc::new(InlineExecutor)
}

/// Must be called from inside a tokio runtime.
pub fn blocking_pool() -> Arc<dyn ExecutionContext> {
    Arc::new(BlockingPoolExecutor::current().unwrap())
}

pub fn handler(
    store: Arc<dyn CounterStore>,
    executor: Arc<dyn ExecutionContext>,
) -> Arc<dyn CommandHandler> {
    let dispatcher = CounterDispatcher::new(store, executor);
    Arc::new(CounterCommandHandler::new(Arc::new(dispatcher)))
}

pub fn incr(key: &str, delta: i64) -> CommandRequest {
    CommandRequest::new(CounterCommand::Increment)
        .with_key(key)
        .with_delta(delta)
}

pub fn decr(key: &str, delta: i64) -> CommandRequest {
    CommandRequest::new(CounterCommand::Decrement)
        .with_key(key)
        .with_delta(delta)
}
