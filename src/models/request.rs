//! Request and response bodies for the generation service.

use serde::{Deserialize, Serialize};

/// Streaming generation endpoint for text and URL input.
pub const STREAM_PATH: &str = "/api/v1/generate/stream";

/// Streaming generation endpoint for file uploads.
pub const UPLOAD_PATH: &str = "/api/v1/generate/upload";

/// Next free day number endpoint.
pub const NEXT_DAY_PATH: &str = "/api/v1/generate/next-day";

/// Multipart field name carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

/// Kind of inline input sent as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Url,
}

/// JSON body for [`STREAM_PATH`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub input_type: InputType,
    pub content: String,
}

impl GenerateRequest {
    /// Create a request body.
    pub fn new(input_type: InputType, content: impl Into<String>) -> Self {
        Self {
            input_type,
            content: content.into(),
        }
    }
}

/// Response body of [`NEXT_DAY_PATH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextDayResponse {
    pub next_day_number: u32,
}
