//! Caller-side handle to one generation request.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::draft::{Draft, Phase};
use crate::error::StreamError;

/// How a generation request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Completed(Draft),
    Failed(StreamError),
    Cancelled,
}

/// State shared between a handle and its read task.
///
/// The phase here is the single arbiter of which terminal outcome wins:
/// completion, failure and cancellation all go through [`Shared::settle`].
#[derive(Debug)]
pub(crate) struct Shared {
    phase: Mutex<Phase>,
    cancel: Notify,
}

impl Shared {
    pub(crate) fn new(phase: Phase) -> Self {
        Self {
            phase: Mutex::new(phase),
            cancel: Notify::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Phase> {
        self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn phase(&self) -> Phase {
        *self.lock()
    }

    /// Move `Requesting` to `Streaming`. No effect in any other phase.
    pub(crate) fn mark_streaming(&self) {
        let mut phase = self.lock();
        if *phase == Phase::Requesting {
            *phase = Phase::Streaming;
        }
    }

    /// Move to a terminal phase if none has been reached yet.
    ///
    /// Returns true for exactly one caller per request.
    pub(crate) fn settle(&self, terminal: Phase) -> bool {
        debug_assert!(terminal.is_terminal());
        let mut phase = self.lock();
        if phase.is_terminal() {
            return false;
        }
        *phase = terminal;
        true
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.phase() == Phase::Cancelled
    }

    /// Resolves once [`CancelHandle::cancel`] has been called.
    ///
    /// A cancel issued while nobody is waiting is remembered for the next call.
    pub(crate) async fn cancelled(&self) {
        self.cancel.notified().await;
    }
}

/// Cloneable way to cancel a request, e.g. from a signal handler.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    shared: Arc<Shared>,
}

impl CancelHandle {
    /// Cancel the request.
    ///
    /// Returns false, and does nothing, if the request already finished.
    pub fn cancel(&self) -> bool {
        if !self.shared.settle(Phase::Cancelled) {
            return false;
        }
        tracing::debug!("Generation cancelled by caller");
        self.shared.cancel.notify_one();
        true
    }
}

/// Handle to one in-flight or finished generation request.
///
/// Dropping the handle does not stop the request; call [`cancel`](Self::cancel).
#[derive(Debug)]
pub struct GenerationHandle {
    id: Uuid,
    shared: Arc<Shared>,
    task: JoinHandle<GenerationOutcome>,
}

impl GenerationHandle {
    pub(crate) fn new(id: Uuid, shared: Arc<Shared>, task: JoinHandle<GenerationOutcome>) -> Self {
        Self { id, shared, task }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.shared.phase()
    }

    /// True once the request reached a terminal phase.
    pub fn is_finished(&self) -> bool {
        self.phase().is_terminal()
    }

    /// Cancel the request. Neither observer callback fires afterwards.
    ///
    /// Returns false if the request already finished.
    pub fn cancel(&self) -> bool {
        self.canceller().cancel()
    }

    /// A cloneable cancel handle for this request.
    pub fn canceller(&self) -> CancelHandle {
        CancelHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Wait for the read task to finish.
    pub async fn wait(self) -> GenerationOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Generation task {} ended abnormally: {}", self.id, e);
                let settled = self.shared.settle(Phase::Error);
                if !settled && self.shared.is_cancelled() {
                    GenerationOutcome::Cancelled
                } else {
                    GenerationOutcome::Failed(StreamError::ConnectionLost {
                        message: e.to_string(),
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_is_exactly_once() {
        let shared = Shared::new(Phase::Requesting);
        assert!(shared.settle(Phase::Complete));
        assert!(!shared.settle(Phase::Error));
        assert!(!shared.settle(Phase::Cancelled));
        assert_eq!(shared.phase(), Phase::Complete);
    }

    #[test]
    fn test_mark_streaming_only_from_requesting() {
        let shared = Shared::new(Phase::Requesting);
        shared.mark_streaming();
        assert_eq!(shared.phase(), Phase::Streaming);

        let shared = Shared::new(Phase::Cancelled);
        shared.mark_streaming();
        assert_eq!(shared.phase(), Phase::Cancelled);
    }

    #[tokio::test]
    async fn test_cancel_before_wait_is_remembered() {
        let shared = Arc::new(Shared::new(Phase::Requesting));
        let canceller = CancelHandle {
            shared: Arc::clone(&shared),
        };

        assert!(canceller.cancel());
        assert!(!canceller.cancel());

        // Resolves immediately because the permit was stored.
        shared.cancelled().await;
        assert!(shared.is_cancelled());
    }
}
