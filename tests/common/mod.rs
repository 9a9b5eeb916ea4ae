//! Common test utilities for integration tests.
//!
//! Builders for SSE bodies and a generator pointed at a `wiremock` server.

use til_draft::auth::ApiKey;
use til_draft::config::ClientConfig;
use til_draft::orchestrator::DraftGenerator;

/// Key used by every integration test.
pub const TEST_KEY: &str = "test-admin-key";

pub fn test_key() -> ApiKey {
    ApiKey::new(TEST_KEY).expect("non-blank key")
}

/// Encode `(event, data)` pairs as an SSE body.
pub fn sse_body(records: &[(&str, &str)]) -> String {
    records
        .iter()
        .map(|(event, data)| format!("event: {}\ndata: {}\n\n", event, data))
        .collect()
}

/// The canonical day-5 stream.
pub fn scenario_body() -> String {
    sse_body(&[
        ("day_number", r#"{"day_number":5}"#),
        ("content_chunk", r#"{"chunk":"Hello "}"#),
        ("content_chunk", r#"{"chunk":"world"}"#),
        ("title", r#"{"title":"T"}"#),
        ("excerpt", r#"{"excerpt":"E"}"#),
        ("complete", "{}"),
    ])
}

/// Generator using the real reqwest transport against `base_url`.
pub fn generator_for(base_url: &str) -> DraftGenerator {
    let config = ClientConfig::default().with_base_url(base_url);
    DraftGenerator::new(&config).expect("client builds")
}
