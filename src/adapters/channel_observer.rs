//! Observer that forwards updates over a tokio channel.
//!
//! Lets a consumer running on another task (the CLI's render loop) react to
//! draft progress without sharing state with the stream reader.

use tokio::sync::mpsc;

use crate::draft::{Draft, DraftState};
use crate::error::StreamError;
use crate::traits::DraftObserver;

/// One observer callback, as a message.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftUpdate {
    Progress(DraftState),
    Completed(Draft),
    Failed(StreamError),
}

/// [`DraftObserver`] that sends every callback as a [`DraftUpdate`].
///
/// Sends never block. If the receiver has been dropped, updates are discarded.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<DraftUpdate>,
}

impl ChannelObserver {
    /// Create an observer and the receiver for its updates.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DraftUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, update: DraftUpdate) {
        if self.tx.send(update).is_err() {
            tracing::debug!("Draft update receiver dropped");
        }
    }
}

impl DraftObserver for ChannelObserver {
    fn on_progress(&mut self, state: &DraftState) {
        self.send(DraftUpdate::Progress(state.clone()));
    }

    fn on_complete(&mut self, draft: Draft) {
        self.send(DraftUpdate::Completed(draft));
    }

    fn on_error(&mut self, error: &StreamError) {
        self.send(DraftUpdate::Failed(error.clone()));
    }
}
