//! Line framing for the generation stream.
//!
//! The transport may split the body anywhere: inside a line, inside the blank
//! line separating records, or inside a multi-byte UTF-8 character. The framer
//! carries both an undecoded byte tail and an unterminated text line across
//! calls, so the events it emits do not depend on chunk boundaries.

use crate::sse::events::{SseLine, SseParseError, StreamEvent};

/// Parse a single SSE line into its component type.
///
/// A field name is followed by `:` and at most one space, which is dropped.
pub fn parse_sse_line(line: &str) -> SseLine {
    if line.is_empty() {
        return SseLine::Empty;
    }

    if let Some(stripped) = line.strip_prefix(':') {
        return SseLine::Comment(stripped.trim().to_string());
    }

    if let Some(value) = field_value(line, "event") {
        return SseLine::Event(value.to_string());
    }

    if let Some(value) = field_value(line, "data") {
        return SseLine::Data(value.to_string());
    }

    SseLine::Other(line.to_string())
}

fn field_value<'a>(line: &'a str, field: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(field)?.strip_prefix(':')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

/// Stateful framer turning byte chunks into [`StreamEvent`]s.
#[derive(Debug, Default)]
pub struct LineFramer {
    /// Bytes of an incomplete UTF-8 sequence at the end of the last chunk
    pending_bytes: Vec<u8>,
    /// Decoded text after the last newline
    buffer: String,
    /// Event name of the record being built
    event_name: Option<String>,
    /// Data payload of the record being built
    data: Option<String>,
}

impl LineFramer {
    /// Create a new framer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk and return every record it completed, in order.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<StreamEvent> {
        self.decode(chunk);

        let Some(last_newline) = self.buffer.rfind('\n') else {
            return Vec::new();
        };

        let tail = self.buffer.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.buffer, tail);

        // `lines` strips the `\n` and a preceding `\r`
        complete
            .lines()
            .filter_map(|line| self.feed_line(line))
            .collect()
    }

    /// Signal end of stream. Any unterminated line or half-built record is dropped.
    pub fn finish(&mut self) {
        if !self.buffer.is_empty()
            || !self.pending_bytes.is_empty()
            || self.event_name.is_some()
            || self.data.is_some()
        {
            tracing::debug!(
                "Discarding {} bytes of unterminated stream data",
                self.buffer.len() + self.pending_bytes.len()
            );
        }
        self.reset();
    }

    /// Clear all state.
    pub fn reset(&mut self) {
        self.pending_bytes.clear();
        self.buffer.clear();
        self.event_name = None;
        self.data = None;
    }

    /// Feed one complete line (without its terminator).
    pub fn feed_line(&mut self, line: &str) -> Option<StreamEvent> {
        match parse_sse_line(line) {
            SseLine::Event(name) => {
                self.event_name = Some(name);
                None
            }
            SseLine::Data(data) => {
                self.data = Some(data);
                None
            }
            SseLine::Empty => self.close_record(),
            SseLine::Comment(_) | SseLine::Other(_) => None,
        }
    }

    fn close_record(&mut self) -> Option<StreamEvent> {
        let event_name = self.event_name.take().filter(|n| !n.is_empty())?;
        let data = self.data.take().filter(|d| !d.is_empty())?;

        match serde_json::from_str(&data) {
            Ok(payload) => Some(StreamEvent::new(event_name, payload)),
            Err(e) => {
                let err = SseParseError::InvalidJson {
                    event_type: event_name,
                    message: e.to_string(),
                };
                tracing::warn!("Skipping SSE record: {} (data: {})", err, data);
                None
            }
        }
    }

    fn decode(&mut self, chunk: &[u8]) {
        let joined;
        let mut rest: &[u8] = if self.pending_bytes.is_empty() {
            chunk
        } else {
            let mut bytes = std::mem::take(&mut self.pending_bytes);
            bytes.extend_from_slice(chunk);
            joined = bytes;
            &joined
        };

        loop {
            match std::str::from_utf8(rest) {
                Ok(text) => {
                    self.buffer.push_str(text);
                    return;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    if let Ok(text) = std::str::from_utf8(valid) {
                        self.buffer.push_str(text);
                    }
                    match e.error_len() {
                        Some(len) => {
                            self.buffer.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[len..];
                        }
                        None => {
                            // Incomplete sequence at the end; wait for the next chunk
                            self.pending_bytes = after.to_vec();
                            return;
                        }
                    }
                }
            }
        }
    }
}
