//! Single-settlement handle for work running on an execution context.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use tracing::debug;

use super::error::DomainError;

/// Future of an in-flight counter operation.
///
/// Resolves exactly once, with the value produced by the submitted work or the
/// failure it raised. If the execution context drops the work without running
/// it, the operation settles with `DomainError::Execution`.
#[must_use = "a pending operation does nothing for the caller unless awaited"]
pub struct PendingOperation<T> {
    rx: oneshot::Receiver<Result<T, DomainError>>,
}

/// Write side of a `PendingOperation`. Consumed on settlement.
pub(crate) struct Settler<T> {
    tx: oneshot::Sender<Result<T, DomainError>>,
}

impl<T> Settler<T> {
    pub(crate) fn settle(self, outcome: Result<T, DomainError>) {
        if self.tx.send(outcome).is_err() {
            debug!("pending operation dropped before settlement; discarding outcome");
        }
    }
}

impl<T> PendingOperation<T> {
    pub(crate) fn channel() -> (Settler<T>, Self) {
        let (tx, rx) = oneshot::channel();
        (Settler { tx }, Self { rx })
    }

    /// Returns an operation that is already settled with `outcome`.
    pub fn settled(outcome: Result<T, DomainError>) -> Self {
        let (settler, op) = Self::channel();
        settler.settle(outcome);
        op
    }
}

impl<T> Future for PendingOperation<T> {
    type Output = Result<T, DomainError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.get_mut().rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(_)) => Poll::Ready(Err(DomainError::execution(anyhow::anyhow!(
                "execution context dropped the operation before it settled"
            )))),
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn settled_operation_resolves_immediately() {
        let op = PendingOperation::settled(Ok(42_i64));
        assert_eq!(op.await.unwrap(), 42);
    }

    #[tokio::test]
    async fn settles_with_value_from_other_task() {
        let (settler, op) = PendingOperation::<i64>::channel();
        tokio::spawn(async move { settler.settle(Ok(7)) });
        assert_eq!(op.await.unwrap(), 7);
    }

    #[tokio::test]
    async fn dropped_settler_fails_operation() {
        let (settler, op) = PendingOperation::<i64>::channel();
        drop(settler);
        let err = op.await.unwrap_err();
        assert!(matches!(err, DomainError::Execution(_)));
        assert!(err.to_string().contains("dropped the operation"));
    }

    #[test]
    fn settling_after_receiver_dropped_is_harmless() {
        let (settler, op) = PendingOperation::<i64>::channel();
        drop(op);
        settler.settle(Ok(1));
    }
}
