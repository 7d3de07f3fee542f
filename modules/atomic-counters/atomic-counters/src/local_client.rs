//! Local client implementing the `AtomicCountersClient` trait.

use std::sync::Arc;

use async_trait::async_trait;
use atomic_counters_sdk::{
    AtomicCountersClient, AtomicCountersError, CommandRequest, CounterCommand,
};

use crate::domain::{CounterDispatcher, validate};

/// Local client for the atomic-counters module.
///
/// Goes through the same validation and dispatch as the command handler but
/// returns the counter value directly instead of an envelope.
pub struct AtomicCountersLocalClient {
    dispatcher: Arc<CounterDispatcher>,
}

impl AtomicCountersLocalClient {
    #[must_use]
    pub fn new(dispatcher: Arc<CounterDispatcher>) -> Self {
        Self { dispatcher }
    }

    async fn run(
        &self,
        command: CounterCommand,
        key: &str,
        delta: i64,
        initial: Option<i64>,
    ) -> Result<i64, AtomicCountersError> {
        let mut req = CommandRequest::new(command).with_key(key).with_delta(delta);
        if let Some(initial) = initial {
            req = req.with_initial(initial);
        }

        let valid = validate(&req)?;
        Ok(self.dispatcher.dispatch(valid).await?)
    }
}

#[async_trait]
impl AtomicCountersClient for AtomicCountersLocalClient {
    async fn increment(
        &self,
        key: &str,
        delta: i64,
        initial: Option<i64>,
    ) -> Result<i64, AtomicCountersError> {
        self.run(CounterCommand::Increment, key, delta, initial).await
    }

    async fn decrement(
        &self,
        key: &str,
        delta: i64,
        initial: Option<i64>,
    ) -> Result<i64, AtomicCountersError> {
        self.run(CounterCommand::Decrement, key, delta, initial).await
    }
}
