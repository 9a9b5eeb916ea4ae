//! End-to-end generation tests using wiremock.
//!
//! These tests drive the reqwest transport against a local mock server and
//! verify request shape, streaming, and error mapping.

mod common;

use std::time::Duration;

use common::{generator_for, scenario_body, sse_body, test_key, TEST_KEY};
use til_draft::adapters::RecordingObserver;
use til_draft::cli::InputArg;
use til_draft::draft::Draft;
use til_draft::error::{DraftError, HttpError, StreamError};
use til_draft::models::DraftSource;
use til_draft::orchestrator::GenerationOutcome;
use wiremock::matchers::{body_json, body_string_contains, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sse_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/event-stream")
}

fn expected_draft() -> Draft {
    Draft {
        title: "T".to_string(),
        excerpt: "E".to_string(),
        content: "Hello world".to_string(),
        day_number: 5,
    }
}

#[tokio::test]
async fn test_text_generation_completes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/generate/stream"))
        .and(header("x-api-key", TEST_KEY))
        .and(header("accept", "text/event-stream"))
        .and(body_json(serde_json::json!({
            "input_type": "text",
            "content": "learned about pinning"
        })))
        .respond_with(sse_response(scenario_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let observer = RecordingObserver::new();
    let outcome = generator_for(&mock_server.uri())
        .start(
            DraftSource::text("learned about pinning"),
            Some(test_key()),
            observer.clone(),
        )
        .unwrap()
        .wait()
        .await;

    assert_eq!(outcome, GenerationOutcome::Completed(expected_draft()));
    assert_eq!(observer.completions(), vec![expected_draft()]);
    assert_eq!(observer.progress().len(), 5);
}

#[tokio::test]
async fn test_url_generation_sends_url_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/generate/stream"))
        .and(body_json(serde_json::json!({
            "input_type": "url",
            "content": "https://blog.example/post"
        })))
        .respond_with(sse_response(scenario_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = generator_for(&mock_server.uri())
        .start(
            DraftSource::url("https://blog.example/post"),
            Some(test_key()),
            RecordingObserver::new(),
        )
        .unwrap()
        .wait()
        .await;

    assert!(matches!(outcome, GenerationOutcome::Completed(_)));
}

#[tokio::test]
async fn test_file_upload_is_multipart() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/generate/upload"))
        .and(header("x-api-key", TEST_KEY))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"notes.md\""))
        .and(body_string_contains("# Borrowing rules"))
        .respond_with(sse_response(scenario_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("notes.md");
    std::fs::write(&file, "# Borrowing rules\n\nOne writer or many readers.\n").unwrap();
    let source = InputArg::File(file).into_source().unwrap();

    let outcome = generator_for(&mock_server.uri())
        .start(source, Some(test_key()), RecordingObserver::new())
        .unwrap()
        .wait()
        .await;

    assert_eq!(outcome, GenerationOutcome::Completed(expected_draft()));
}

#[tokio::test]
async fn test_rejection_carries_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/generate/stream"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"detail": "Invalid API key"})),
        )
        .mount(&mock_server)
        .await;

    let observer = RecordingObserver::new();
    let outcome = generator_for(&mock_server.uri())
        .start(DraftSource::text("notes"), Some(test_key()), observer.clone())
        .unwrap()
        .wait()
        .await;

    let expected = StreamError::Rejected {
        status: 401,
        detail: "Invalid API key".to_string(),
    };
    assert_eq!(outcome, GenerationOutcome::Failed(expected.clone()));
    assert_eq!(observer.errors(), vec![expected.clone()]);
    assert!(expected.user_message().contains("login"));
}

#[tokio::test]
async fn test_rejection_without_detail_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let outcome = generator_for(&mock_server.uri())
        .start(DraftSource::text("notes"), Some(test_key()), RecordingObserver::new())
        .unwrap()
        .wait()
        .await;

    assert_eq!(
        outcome,
        GenerationOutcome::Failed(StreamError::Rejected {
            status: 502,
            detail: "Generation request failed".to_string(),
        })
    );
}

#[tokio::test]
async fn test_error_event_fails_generation() {
    let mock_server = MockServer::start().await;

    let body = sse_body(&[
        ("content_chunk", r#"{"chunk":"partial"}"#),
        ("error", r#"{"error":"quota exceeded"}"#),
    ]);
    Mock::given(method("POST"))
        .respond_with(sse_response(body))
        .mount(&mock_server)
        .await;

    let observer = RecordingObserver::new();
    let outcome = generator_for(&mock_server.uri())
        .start(DraftSource::text("notes"), Some(test_key()), observer.clone())
        .unwrap()
        .wait()
        .await;

    assert_eq!(
        outcome,
        GenerationOutcome::Failed(StreamError::Upstream("quota exceeded".to_string()))
    );
    assert!(observer.completions().is_empty());
}

#[tokio::test]
async fn test_body_without_complete_is_incomplete() {
    let mock_server = MockServer::start().await;

    let body = sse_body(&[("content_chunk", r#"{"chunk":"half a thought"}"#)]);
    Mock::given(method("POST"))
        .respond_with(sse_response(body))
        .mount(&mock_server)
        .await;

    let outcome = generator_for(&mock_server.uri())
        .start(DraftSource::text("notes"), Some(test_key()), RecordingObserver::new())
        .unwrap()
        .wait()
        .await;

    assert_eq!(outcome, GenerationOutcome::Failed(StreamError::Incomplete));
}

#[tokio::test]
async fn test_cancel_while_server_is_slow() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(sse_response(scenario_body()).set_delay(Duration::from_secs(30)))
        .mount(&mock_server)
        .await;

    let observer = RecordingObserver::new();
    let handle = generator_for(&mock_server.uri())
        .start(DraftSource::text("notes"), Some(test_key()), observer.clone())
        .unwrap();

    assert!(handle.cancel());

    let outcome = tokio::time::timeout(Duration::from_secs(5), handle.wait())
        .await
        .expect("cancel wakes the read task");
    assert_eq!(outcome, GenerationOutcome::Cancelled);
    assert_eq!(observer.terminal_calls(), 0);
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    // Bind then release a port so nothing is listening on it.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let uri = format!("http://127.0.0.1:{}", port);

    let outcome = generator_for(&uri)
        .start(DraftSource::text("notes"), Some(test_key()), RecordingObserver::new())
        .unwrap()
        .wait()
        .await;

    assert!(matches!(
        outcome,
        GenerationOutcome::Failed(StreamError::Transport { .. })
    ));
}

#[tokio::test]
async fn test_next_day_number() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/generate/next-day"))
        .and(header("x-api-key", TEST_KEY))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"next_day_number": 12})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let day = generator_for(&mock_server.uri())
        .next_day_number(&test_key())
        .await
        .unwrap();

    assert_eq!(day, 12);
}

#[tokio::test]
async fn test_next_day_number_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/generate/next-day"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"detail": "Invalid API key"})),
        )
        .mount(&mock_server)
        .await;

    let err = generator_for(&mock_server.uri())
        .next_day_number(&test_key())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DraftError::Http(HttpError::ServerError { status: 401, .. })
    ));
    assert!(err.user_message().contains("login"));
}
