//! The per-request read task.

use futures_util::StreamExt;
use std::sync::Arc;
use uuid::Uuid;

use super::handle::{GenerationOutcome, Shared};
use crate::auth::ApiKey;
use crate::draft::{Applied, Draft, DraftAccumulator, Phase};
use crate::error::StreamError;
use crate::models::{
    DraftSource, GenerateRequest, InputType, STREAM_PATH, UPLOAD_FIELD, UPLOAD_PATH,
};
use crate::sse::{interpret, LineFramer};
use crate::traits::{DraftObserver, Headers, HttpClient, HttpError, RequestBody};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// A fully built generation request.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StreamRequest {
    pub url: String,
    pub body: RequestBody,
    pub headers: Headers,
}

impl StreamRequest {
    /// Build the request for `source`.
    ///
    /// Text and URL input go to the JSON endpoint, files to the upload endpoint.
    pub(crate) fn build(
        base_url: &str,
        source: DraftSource,
        key: &ApiKey,
    ) -> Result<Self, serde_json::Error> {
        let mut headers = Headers::new();
        headers.insert(API_KEY_HEADER.to_string(), key.expose().to_string());
        headers.insert("Accept".to_string(), "text/event-stream".to_string());

        let (path, body) = match source {
            DraftSource::Text { body } => (STREAM_PATH, json_body(InputType::Text, body)?),
            DraftSource::Url { body } => (STREAM_PATH, json_body(InputType::Url, body)?),
            DraftSource::File { payload, filename } => (
                UPLOAD_PATH,
                RequestBody::Multipart {
                    field: UPLOAD_FIELD.to_string(),
                    filename,
                    data: payload,
                },
            ),
        };
        if matches!(body, RequestBody::Json(_)) {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        Ok(Self {
            url: format!("{}{}", base_url, path),
            body,
            headers,
        })
    }
}

fn json_body(input_type: InputType, content: String) -> Result<RequestBody, serde_json::Error> {
    serde_json::to_string(&GenerateRequest::new(input_type, content)).map(RequestBody::Json)
}

/// Drive one request from send to terminal outcome.
pub(crate) async fn run<C, O>(
    id: Uuid,
    client: Arc<C>,
    base_url: String,
    source: DraftSource,
    key: ApiKey,
    day_number: Option<u32>,
    shared: Arc<Shared>,
    mut observer: O,
) -> GenerationOutcome
where
    C: HttpClient + ?Sized,
    O: DraftObserver,
{
    let mut acc = match day_number {
        Some(day) => DraftAccumulator::with_day_number(day),
        None => DraftAccumulator::new(),
    };
    acc.begin();

    let request = match StreamRequest::build(&base_url, source, &key) {
        Ok(request) => request,
        Err(e) => {
            let error = StreamError::Transport {
                message: e.to_string(),
            };
            return fail(id, &shared, &mut observer, error);
        }
    };
    tracing::debug!("Generation {} sending POST {}", id, request.url);

    let response = tokio::select! {
        biased;
        _ = shared.cancelled() => return cancelled(id, &mut acc),
        response = client.post_stream(&request.url, request.body, &request.headers) => response,
    };

    let mut stream = match response {
        Ok(stream) => stream,
        Err(HttpError::ServerError { status, message }) => {
            let error = StreamError::rejected(status, &message);
            return fail(id, &shared, &mut observer, error);
        }
        Err(e) => {
            let error = StreamError::Transport {
                message: e.to_string(),
            };
            return fail(id, &shared, &mut observer, error);
        }
    };

    let mut framer = LineFramer::new();
    loop {
        let next = tokio::select! {
            biased;
            _ = shared.cancelled() => return cancelled(id, &mut acc),
            next = stream.next() => next,
        };

        let chunk = match next {
            Some(Ok(chunk)) => chunk,
            Some(Err(e)) => {
                let error = StreamError::ConnectionLost {
                    message: e.to_string(),
                };
                return fail(id, &shared, &mut observer, error);
            }
            None => {
                framer.finish();
                return fail(id, &shared, &mut observer, StreamError::Incomplete);
            }
        };

        for event in framer.push(&chunk) {
            if shared.is_cancelled() {
                return cancelled(id, &mut acc);
            }

            match acc.apply(interpret(&event)) {
                Applied::Ignored => {}
                Applied::Updated => {
                    shared.mark_streaming();
                    if shared.is_cancelled() {
                        return cancelled(id, &mut acc);
                    }
                    observer.on_progress(acc.state());
                }
                Applied::Completed(draft) => {
                    drop(stream);
                    return complete(id, &shared, &mut observer, draft);
                }
                Applied::Failed(reason) => {
                    return fail(id, &shared, &mut observer, StreamError::Upstream(reason));
                }
            }
        }
    }
}

fn complete<O: DraftObserver>(
    id: Uuid,
    shared: &Shared,
    observer: &mut O,
    draft: Draft,
) -> GenerationOutcome {
    if !shared.settle(Phase::Complete) {
        return GenerationOutcome::Cancelled;
    }
    tracing::info!(
        "Generation {} complete: day {}, {} bytes of content",
        id,
        draft.day_number,
        draft.content.len()
    );
    observer.on_complete(draft.clone());
    GenerationOutcome::Completed(draft)
}

fn fail<O: DraftObserver>(
    id: Uuid,
    shared: &Shared,
    observer: &mut O,
    error: StreamError,
) -> GenerationOutcome {
    if !shared.settle(Phase::Error) {
        return GenerationOutcome::Cancelled;
    }
    tracing::info!("Generation {} failed [{}]: {}", id, error.error_code(), error);
    observer.on_error(&error);
    GenerationOutcome::Failed(error)
}

fn cancelled(id: Uuid, acc: &mut DraftAccumulator) -> GenerationOutcome {
    acc.cancel();
    tracing::debug!("Generation {} stopped after cancel", id);
    GenerationOutcome::Cancelled
}
