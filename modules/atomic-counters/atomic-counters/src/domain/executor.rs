//! Execution contexts that run counter work off the caller's thread.
//!
//! `ExecutionContext` is object-safe so it can be injected as
//! `Arc<dyn ExecutionContext>`; the typed `submit` entry point lives on
//! `ExecutionContextExt` and is available for every context.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tokio::runtime::Handle;

use super::error::DomainError;
use super::pending::PendingOperation;

/// A unit of work handed to an execution context.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Runs submitted jobs. Jobs must not be run more than once.
pub trait ExecutionContext: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Runs `job`, now or later, on a thread of the context's choosing.
    fn execute(&self, job: Job);
}

/// Typed submission on top of any `ExecutionContext`.
pub trait ExecutionContextExt: ExecutionContext {
    /// Submits `work` and returns the operation that settles with its outcome.
    ///
    /// Errors returned by `work` and panics raised inside it are captured as
    /// `DomainError::Execution`; they never reach the caller or the worker.
    fn submit<T, F>(&self, work: F) -> PendingOperation<T>
    where
        T: Send + 'static,
        F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    {
        let (settler, op) = PendingOperation::channel();
        self.execute(Box::new(move || {
            let outcome = match panic::catch_unwind(AssertUnwindSafe(work)) {
                Ok(Ok(value)) => Ok(value),
                Ok(Err(cause)) => Err(DomainError::execution(cause)),
                Err(payload) => Err(DomainError::execution(anyhow::anyhow!(
                    "counter operation panicked: {}",
                    panic_message(payload.as_ref())
                ))),
            };
            settler.settle(outcome);
        }));
        op
    }
}

impl<E: ExecutionContext + ?Sized> ExecutionContextExt for E {}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}

/// Runs jobs on the blocking thread pool of a tokio runtime.
///
/// Counter stores are synchronous and may block on I/O, so jobs never run on
/// the async worker threads.
#[derive(Clone)]
pub struct BlockingPoolExecutor {
    handle: Handle,
}

impl BlockingPoolExecutor {
    #[must_use]
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Binds to the runtime the caller is running in.
    ///
    /// # Errors
    /// Returns an error when called outside a tokio runtime.
    pub fn current() -> anyhow::Result<Self> {
        let handle = Handle::try_current()
            .map_err(|e| anyhow::anyhow!("blocking pool executor requires a tokio runtime: {e}"))?;
        Ok(Self::new(handle))
    }
}

impl ExecutionContext for BlockingPoolExecutor {
    fn name(&self) -> &'static str {
        "blocking_pool"
    }

    fn execute(&self, job: Job) {
        // Detached: the job reports through its own settler.
        drop(self.handle.spawn_blocking(job));
    }
}

/// Runs every job synchronously on the submitting thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineExecutor;

impl ExecutionContext for InlineExecutor {
    fn name(&self) -> &'static str {
        "inline"
    }

    fn execute(&self, job: Job) {
        job();
    }
}
