//! Recording observer for testing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::draft::{Draft, DraftState};
use crate::error::StreamError;
use crate::traits::DraftObserver;

#[derive(Debug, Default)]
struct Recorded {
    progress: Vec<DraftState>,
    completions: Vec<Draft>,
    errors: Vec<StreamError>,
}

/// Observer that records every callback.
///
/// Clones share the same record, so a test keeps one clone and hands the other
/// to the generator.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    inner: Arc<Mutex<Recorded>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshots passed to `on_progress`, in order.
    pub fn progress(&self) -> Vec<DraftState> {
        self.lock().progress.clone()
    }

    /// Drafts passed to `on_complete`.
    pub fn completions(&self) -> Vec<Draft> {
        self.lock().completions.clone()
    }

    /// Errors passed to `on_error`.
    pub fn errors(&self) -> Vec<StreamError> {
        self.lock().errors.clone()
    }

    /// Total number of terminal callbacks received.
    pub fn terminal_calls(&self) -> usize {
        let recorded = self.lock();
        recorded.completions.len() + recorded.errors.len()
    }
}

impl DraftObserver for RecordingObserver {
    fn on_progress(&mut self, state: &DraftState) {
        self.lock().progress.push(state.clone());
    }

    fn on_complete(&mut self, draft: Draft) {
        self.lock().completions.push(draft);
    }

    fn on_error(&mut self, error: &StreamError) {
        self.lock().errors.push(error.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_record() {
        let observer = RecordingObserver::new();
        let mut handed_out = observer.clone();

        handed_out.on_progress(&DraftState::default());
        handed_out.on_error(&StreamError::Incomplete);

        assert_eq!(observer.progress().len(), 1);
        assert_eq!(observer.errors(), vec![StreamError::Incomplete]);
        assert_eq!(observer.terminal_calls(), 1);
    }
}
