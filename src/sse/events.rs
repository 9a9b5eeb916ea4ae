//! SSE wire types.

use thiserror::Error;

/// One complete record from the stream: an event name and its JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamEvent {
    pub event_name: String,
    pub payload: serde_json::Value,
}

impl StreamEvent {
    /// Create an event.
    pub fn new(event_name: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            event_name: event_name.into(),
            payload,
        }
    }
}

/// Represents a parsed SSE line
#[derive(Debug, Clone, PartialEq)]
pub enum SseLine {
    /// Event name declaration (e.g., "event: content_chunk")
    Event(String),
    /// Data payload (e.g., "data: {\"chunk\": \"hello\"}")
    Data(String),
    /// Empty line - closes the record
    Empty,
    /// Comment line (starts with ':')
    Comment(String),
    /// Any other field or garbage
    Other(String),
}

/// Errors that can occur while decoding one record.
///
/// None of these are fatal to the stream; the record is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SseParseError {
    /// Invalid JSON in data payload
    #[error("Invalid JSON for event '{event_type}': {message}")]
    InvalidJson { event_type: String, message: String },
    /// Payload is JSON but lacks the expected field or has the wrong type
    #[error("Malformed payload for event '{event_type}': {message}")]
    MalformedPayload { event_type: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sse_parse_error_display() {
        let err = SseParseError::InvalidJson {
            event_type: "title".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid JSON for event 'title': expected value"
        );

        let err = SseParseError::MalformedPayload {
            event_type: "day_number".to_string(),
            message: "missing field `day_number`".to_string(),
        };
        assert!(err.to_string().contains("day_number"));
    }
}
