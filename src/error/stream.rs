//! Streaming-related error types.
//!
//! Every variant here is terminal for the generation request that produced it.
//! The partial draft is discarded when one of these is reported.

use thiserror::Error;

/// Fallback reason used when the service rejects a request without a `detail` field.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Generation request failed";

/// Terminal failures of a generation stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// The service answered with a non-2xx status.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    /// The request could not be sent or no response headers arrived.
    #[error("request failed: {message}")]
    Transport { message: String },

    /// Reading the response body failed mid-stream.
    #[error("stream connection lost: {message}")]
    ConnectionLost { message: String },

    /// The body ended before a `complete` event arrived.
    #[error("stream ended before the draft was complete")]
    Incomplete,

    /// The service reported a failure through an `error` event.
    #[error("{0}")]
    Upstream(String),
}

impl StreamError {
    /// Build a rejection from a status code and the raw response body.
    ///
    /// The service sends `{"detail": "..."}` on failure; anything else falls back
    /// to [`DEFAULT_REJECTION_MESSAGE`].
    pub fn rejected(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
        StreamError::Rejected { status, detail }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StreamError::Rejected { status: 401, .. } => {
                "The API key was rejected. Run `til-draft login` again.".to_string()
            }
            StreamError::Rejected { detail, .. } => detail.clone(),
            StreamError::Transport { .. } => {
                "Could not reach the generation service. Check the API URL and try again."
                    .to_string()
            }
            StreamError::ConnectionLost { .. } => {
                "Connection to the generation service was lost. Please try again.".to_string()
            }
            StreamError::Incomplete => {
                "The generation service stopped before finishing the draft.".to_string()
            }
            StreamError::Upstream(reason) => reason.clone(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StreamError::Rejected { .. } => "E_STREAM_REJECTED",
            StreamError::Transport { .. } => "E_STREAM_TRANSPORT",
            StreamError::ConnectionLost { .. } => "E_STREAM_CONN",
            StreamError::Incomplete => "E_STREAM_INCOMPLETE",
            StreamError::Upstream(_) => "E_STREAM_UPSTREAM",
        }
    }
}
