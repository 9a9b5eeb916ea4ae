//! The draft accumulator.
//!
//! Owns one [`DraftState`] for the lifetime of a generation request and applies
//! [`DraftCommand`]s to it strictly in order. Once the phase is terminal every
//! further command is a no-op, so late events can never resurrect a finished
//! draft.

use super::command::DraftCommand;
use super::state::{Draft, DraftState, Phase};

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// Nothing changed
    Ignored,
    /// A field changed; progress observers should be notified
    Updated,
    /// The draft is complete; this is the only time it is handed out
    Completed(Draft),
    /// The stream reported a failure
    Failed(String),
}

/// Sole owner of the in-progress draft.
#[derive(Debug, Default)]
pub struct DraftAccumulator {
    state: DraftState,
    failure: Option<String>,
}

impl DraftAccumulator {
    /// Create an accumulator in the `Idle` phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accumulator whose draft starts at a known day number.
    pub fn with_day_number(day_number: u32) -> Self {
        let mut acc = Self::default();
        if day_number >= 1 {
            acc.state.day_number = day_number;
        }
        acc
    }

    /// Current draft state.
    pub fn state(&self) -> &DraftState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Failure reason once the phase is `Error`.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Mark the request as sent. Only valid from `Idle`.
    pub fn begin(&mut self) -> bool {
        if self.state.phase != Phase::Idle {
            return false;
        }
        self.state.phase = Phase::Requesting;
        true
    }

    /// Apply a command.
    pub fn apply(&mut self, command: DraftCommand) -> Applied {
        if !self.state.phase.accepts_commands() {
            tracing::debug!(
                "Dropping {} in phase {:?}",
                command.name(),
                self.state.phase
            );
            return Applied::Ignored;
        }

        match command {
            DraftCommand::SetDayNumber(n) => {
                if n == 0 {
                    return Applied::Ignored;
                }
                self.state.day_number = n;
            }
            DraftCommand::AppendContent(chunk) => {
                self.state.content.push_str(&chunk);
            }
            DraftCommand::SetTitle(title) => {
                self.state.title = title;
            }
            DraftCommand::SetExcerpt(excerpt) => {
                self.state.excerpt = excerpt;
            }
            DraftCommand::Finalize => {
                self.state.phase = Phase::Complete;
                return Applied::Completed(self.state.to_draft());
            }
            DraftCommand::Abort(reason) => {
                self.fail(reason.clone());
                return Applied::Failed(reason);
            }
            DraftCommand::Ignore => return Applied::Ignored,
        }

        self.state.phase = Phase::Streaming;
        Applied::Updated
    }

    /// Move to `Error` for a failure observed outside the event stream.
    ///
    /// Returns false if the phase was already terminal.
    pub fn fail(&mut self, reason: impl Into<String>) -> bool {
        if self.state.phase.is_terminal() {
            return false;
        }
        self.state.phase = Phase::Error;
        self.failure = Some(reason.into());
        true
    }

    /// Move to `Cancelled`. Returns false if the phase was already terminal.
    pub fn cancel(&mut self) -> bool {
        if self.state.phase.is_terminal() {
            return false;
        }
        self.state.phase = Phase::Cancelled;
        true
    }
}
