//! Event interpretation.
//!
//! Maps each [`StreamEvent`] to the [`DraftCommand`] it stands for. Unknown
//! event names and known events with a missing or mistyped field become
//! [`DraftCommand::Ignore`]. An `error` event always aborts; when it carries no
//! usable reason, [`DEFAULT_ERROR_REASON`] is used.

use serde::de::DeserializeOwned;

use crate::draft::DraftCommand;
use crate::sse::events::{SseParseError, StreamEvent};
use crate::sse::payloads::{
    ContentChunkPayload, DayNumberPayload, ErrorPayload, ExcerptPayload, TitlePayload,
};

/// Abort reason for an `error` event without a readable `error` field.
pub const DEFAULT_ERROR_REASON: &str = "generation failed";

/// Translate one event into a draft command.
pub fn interpret(event: &StreamEvent) -> DraftCommand {
    let name = event.event_name.as_str();
    let command = match name {
        "day_number" => {
            decode::<DayNumberPayload>(event).map(|p| DraftCommand::SetDayNumber(p.day_number))
        }
        "content_chunk" => {
            decode::<ContentChunkPayload>(event).map(|p| DraftCommand::AppendContent(p.chunk))
        }
        "title" => decode::<TitlePayload>(event).map(|p| DraftCommand::SetTitle(p.title)),
        "excerpt" => decode::<ExcerptPayload>(event).map(|p| DraftCommand::SetExcerpt(p.excerpt)),
        "complete" => Ok(DraftCommand::Finalize),
        "error" => {
            let reason = decode::<ErrorPayload>(event)
                .map(|p| p.error)
                .ok()
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR_REASON.to_string());
            Ok(DraftCommand::Abort(reason))
        }
        _ => {
            tracing::debug!("Ignoring unknown event '{}'", name);
            Ok(DraftCommand::Ignore)
        }
    };

    command.unwrap_or_else(|err| {
        tracing::warn!("Skipping SSE record: {}", err);
        DraftCommand::Ignore
    })
}

fn decode<P: DeserializeOwned>(event: &StreamEvent) -> Result<P, SseParseError> {
    P::deserialize(&event.payload).map_err(|e| SseParseError::MalformedPayload {
        event_type: event.event_name.clone(),
        message: e.to_string(),
    })
}
