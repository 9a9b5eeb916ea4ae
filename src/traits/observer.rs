//! Draft observer trait.
//!
//! The orchestrator reports progress and the terminal result of a generation
//! through this trait. All methods run synchronously on the task that reads
//! the stream, so they must return quickly and must not perform network I/O.

use crate::draft::{Draft, DraftState};
use crate::error::StreamError;

/// Receives updates for one generation request.
///
/// For a request that is not cancelled, exactly one of [`on_complete`] and
/// [`on_error`] is called, once. A cancelled request calls neither.
///
/// [`on_complete`]: DraftObserver::on_complete
/// [`on_error`]: DraftObserver::on_error
pub trait DraftObserver: Send + 'static {
    /// Called after every applied `day_number`, `content_chunk`, `title` and
    /// `excerpt` event, with the state right after the change.
    fn on_progress(&mut self, _state: &DraftState) {}

    /// Called once with the finished draft.
    fn on_complete(&mut self, draft: Draft);

    /// Called once with the reason the generation failed.
    fn on_error(&mut self, error: &StreamError);
}
