//! SSE (Server-Sent Events) ingestion for the generation stream.
//!
//! The generation service sends records of the form:
//! - `event: <name>` - event name line
//! - `data: <json>` - data payload line
//! - Empty line - closes the record
//! - Lines starting with `:` - comments (ignored)
//!
//! # Module structure
//! - `events` - Wire types (StreamEvent, SseLine, SseParseError)
//! - `framer` - LineFramer, turning raw byte chunks into StreamEvents
//! - `payloads` - Payload structs for each known event
//! - `interpreter` - Maps a StreamEvent to a DraftCommand

mod events;
mod framer;
mod interpreter;
mod payloads;

pub use events::{SseLine, SseParseError, StreamEvent};
pub use framer::{parse_sse_line, LineFramer};
pub use interpreter::{interpret, DEFAULT_ERROR_REASON};
