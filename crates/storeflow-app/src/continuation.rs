// Rust guideline compliant 2026-10-18

//! Single-shot continuations for pending actions.
//!
//! A `Continuation` is the settling half and a `Pending` is the awaiting
//! half. Settling consumes the continuation, so an action can be resolved
//! or rejected at most once.

use crate::error::{AppError, Result};
use tokio::sync::oneshot;

/// Creates a connected continuation and pending pair.
#[must_use]
pub fn continuation<T, E>() -> (Continuation<T, E>, Pending<T, E>) {
    let (sender, receiver) = oneshot::channel();
    (Continuation { sender }, Pending { receiver })
}

/// The settling half of a pending action.
#[derive(Debug)]
pub struct Continuation<T, E> {
    sender: oneshot::Sender<std::result::Result<T, E>>,
}

impl<T, E> Continuation<T, E> {
    /// Settles the action successfully.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ContinuationClosed` if the pending half was dropped.
    pub fn resolve(self, value: T) -> Result<()> {
        self.settle(Ok(value))
    }

    /// Settles the action as failed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ContinuationClosed` if the pending half was dropped.
    pub fn reject(self, error: E) -> Result<()> {
        self.settle(Err(error))
    }

    /// Returns true if nobody is waiting for the outcome any more.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    fn settle(self, outcome: std::result::Result<T, E>) -> Result<()> {
        self.sender
            .send(outcome)
            .map_err(|_| AppError::ContinuationClosed)
    }
}

/// The awaiting half of a pending action.
#[derive(Debug)]
pub struct Pending<T, E> {
    receiver: oneshot::Receiver<std::result::Result<T, E>>,
}

impl<T, E> Pending<T, E> {
    /// Waits for the action to settle.
    ///
    /// Returns `None` if the continuation was dropped without settling.
    pub async fn wait(self) -> Option<std::result::Result<T, E>> {
        self.receiver.await.ok()
    }

    /// Blocks the current thread until the action settles.
    ///
    /// Must not be called from within an async runtime.
    #[must_use]
    pub fn blocking_wait(self) -> Option<std::result::Result<T, E>> {
        self.receiver.blocking_recv().ok()
    }

    /// Takes the outcome if the action has already settled.
    pub fn try_take(&mut self) -> Option<std::result::Result<T, E>> {
        self.receiver.try_recv().ok()
    }
}
