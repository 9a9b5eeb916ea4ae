//! Payload deserialization structs for the generation stream.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DayNumberPayload {
    pub day_number: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ContentChunkPayload {
    pub chunk: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TitlePayload {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ExcerptPayload {
    pub excerpt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorPayload {
    pub error: String,
}
