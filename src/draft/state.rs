//! Draft value types.

use serde::{Deserialize, Serialize};

/// Lifecycle stage of one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Created, no request issued yet
    #[default]
    Idle,
    /// Request sent, no event applied yet
    Requesting,
    /// At least one event applied
    Streaming,
    /// `complete` received; the draft has been handed out
    Complete,
    /// Failed; the draft was discarded
    Error,
    /// Cancelled by the caller; the draft was discarded
    Cancelled,
}

impl Phase {
    /// Returns true for `Complete`, `Error` and `Cancelled`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Complete | Phase::Error | Phase::Cancelled)
    }

    /// Returns true while commands may still change the draft.
    pub fn accepts_commands(self) -> bool {
        matches!(self, Phase::Requesting | Phase::Streaming)
    }
}

/// The draft in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftState {
    pub day_number: u32,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub phase: Phase,
}

impl Default for DraftState {
    fn default() -> Self {
        Self {
            day_number: 1,
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            phase: Phase::Idle,
        }
    }
}

impl DraftState {
    /// Short status line for progress displays.
    pub fn progress_label(&self) -> String {
        match self.phase {
            Phase::Idle => "Waiting".to_string(),
            Phase::Requesting => "Starting generation...".to_string(),
            Phase::Streaming if !self.excerpt.is_empty() => "Excerpt ready".to_string(),
            Phase::Streaming if !self.title.is_empty() => "Title ready".to_string(),
            Phase::Streaming => format!("Generating day {}...", self.day_number),
            Phase::Complete => "Done".to_string(),
            Phase::Error => "Failed".to_string(),
            Phase::Cancelled => "Cancelled".to_string(),
        }
    }

    /// Freeze the current fields into a [`Draft`].
    pub(crate) fn to_draft(&self) -> Draft {
        Draft {
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            day_number: self.day_number,
        }
    }
}

/// A finished draft, handed to the completion callback exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub day_number: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_phases() {
        assert!(!Phase::Idle.is_terminal());
        assert!(!Phase::Requesting.is_terminal());
        assert!(!Phase::Streaming.is_terminal());
        assert!(Phase::Complete.is_terminal());
        assert!(Phase::Error.is_terminal());
        assert!(Phase::Cancelled.is_terminal());
    }

    #[test]
    fn test_accepts_commands() {
        assert!(!Phase::Idle.accepts_commands());
        assert!(Phase::Requesting.accepts_commands());
        assert!(Phase::Streaming.accepts_commands());
        assert!(!Phase::Complete.accepts_commands());
    }

    #[test]
    fn test_default_state_starts_at_day_one() {
        let state = DraftState::default();
        assert_eq!(state.day_number, 1);
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.content.is_empty());
    }

    #[test]
    fn test_progress_label() {
        let mut state = DraftState {
            phase: Phase::Streaming,
            day_number: 5,
            ..Default::default()
        };
        assert_eq!(state.progress_label(), "Generating day 5...");

        state.title = "T".to_string();
        assert_eq!(state.progress_label(), "Title ready");

        state.excerpt = "E".to_string();
        assert_eq!(state.progress_label(), "Excerpt ready");

        state.phase = Phase::Complete;
        assert_eq!(state.progress_label(), "Done");
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = Draft {
            title: "T".to_string(),
            excerpt: "E".to_string(),
            content: "C".to_string(),
            day_number: 5,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["dayNumber"], 5);
        assert_eq!(json["title"], "T");
    }
}
