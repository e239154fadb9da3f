//! Cancelable wrappers for in-flight requests.
//!
//! [`make_cancelable`] starts a pending operation on the tokio runtime and
//! hands back a [`Cancelable`] future plus a [`CancelHandle`]. Calling
//! [`CancelHandle::cancel`] does not interrupt the request; it only guarantees
//! that its outcome is never delivered. Whichever of "request finished" and
//! "cancel requested" comes first decides what the caller sees:
//!
//! ```no_run
//! # async fn demo(client: music_api::MusicClient) {
//! use music_api::cancel::{CancelError, make_cancelable};
//!
//! let (lyric, cancel) = make_cancelable(client.lyric(186_016));
//! // The user navigated away before the lyric arrived.
//! cancel.cancel();
//! assert!(matches!(lyric.await, Err(CancelError::Canceled)));
//! # }
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::{Context, Poll};

use thiserror::Error;
use tokio::task::JoinHandle;

/// Failure outcome of a [`Cancelable`] operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CancelError<E> {
    /// The outcome was suppressed because the handle was canceled before the
    /// wrapped operation settled. Whether it succeeded or failed is discarded.
    #[error("request canceled")]
    Canceled,

    /// The wrapped operation failed and was not canceled.
    #[error("{0}")]
    Failed(E),
}

impl<E> CancelError<E> {
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }

    /// Return the wrapped operation's own failure, if that is what was delivered.
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Canceled => None,
            Self::Failed(err) => Some(err),
        }
    }
}

/// Trigger that marks one wrapped operation as no longer wanted.
///
/// Clones share the flag of the wrapping they came from. The flag only ever
/// goes from active to canceled.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    canceled: Arc<AtomicBool>,
}

impl CancelHandle {
    fn new() -> Self {
        Self {
            canceled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request that the outcome be suppressed. Calling this again is a no-op.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::SeqCst)
    }
}

/// Future returned by [`make_cancelable`].
///
/// Resolves exactly once. Dropping it detaches the wrapped operation, which
/// keeps running to completion in the background.
///
/// If the tokio runtime shuts down before the wrapped operation settles, the
/// outcome is [`CancelError::Canceled`] even though no [`CancelHandle`] was
/// triggered. This is the only way to observe `Canceled` without calling
/// [`CancelHandle::cancel`].
#[derive(Debug)]
#[must_use = "dropping a Cancelable discards the request outcome"]
pub struct Cancelable<T, E> {
    task: JoinHandle<Result<T, CancelError<E>>>,
}

impl<T, E> Cancelable<T, E> {
    /// Whether the outcome has already been decided.
    ///
    /// Once this returns `true`, canceling no longer changes the result.
    pub fn is_settled(&self) -> bool {
        self.task.is_finished()
    }
}

impl<T, E> Future for Cancelable<T, E> {
    type Output = Result<T, CancelError<E>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.task).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(err)) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            // Runtime shut down before the operation settled.
            Poll::Ready(Err(_)) => Poll::Ready(Err(CancelError::Canceled)),
        }
    }
}

/// Start `pending` and return a future of its outcome plus a cancel trigger.
///
/// The outcome is decided when `pending` settles by reading the cancel flag at
/// that instant: if it is set, the caller receives [`CancelError::Canceled`]
/// whatever `pending` produced; otherwise the value or failure is relayed
/// unchanged.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
pub fn make_cancelable<F, T, E>(pending: F) -> (Cancelable<T, E>, CancelHandle)
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let handle = CancelHandle::new();
    let flag = handle.clone();
    let task = tokio::spawn(async move {
        let outcome = pending.await;
        if flag.is_canceled() {
            tracing::debug!(
                succeeded = outcome.is_ok(),
                "discarding outcome of canceled request"
            );
            return Err(CancelError::Canceled);
        }
        outcome.map_err(CancelError::Failed)
    });
    (Cancelable { task }, handle)
}
