//! Generation request lifecycle.
//!
//! [`DraftGenerator::start`] validates the input, then spawns one tokio task per
//! request. The task reads the response body, frames it into events, and
//! applies them to a [`DraftAccumulator`](crate::draft::DraftAccumulator),
//! reporting to a [`DraftObserver`]. The returned [`GenerationHandle`] cancels
//! or awaits the request.

mod handle;
mod run;

pub use handle::{CancelHandle, GenerationHandle, GenerationOutcome};
pub use run::API_KEY_HEADER;

use std::sync::Arc;
use uuid::Uuid;

use crate::adapters::ReqwestHttpClient;
use crate::auth::ApiKey;
use crate::config::ClientConfig;
use crate::draft::Phase;
use crate::error::{DraftError, DraftResult, ValidationError};
use crate::models::{DraftSource, NextDayResponse, NEXT_DAY_PATH};
use crate::traits::{DraftObserver, Headers, HttpClient, HttpError};
use handle::Shared;

/// Starts generation requests against one service.
#[derive(Debug)]
pub struct DraftGenerator<C: ?Sized = ReqwestHttpClient> {
    client: Arc<C>,
    base_url: String,
}

impl DraftGenerator<ReqwestHttpClient> {
    /// Create a generator using the reqwest transport.
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        let client = ReqwestHttpClient::with_connect_timeout(config.connect_timeout)?;
        Ok(Self::with_client(config, client))
    }
}

impl<C: HttpClient + ?Sized + 'static> DraftGenerator<C> {
    /// Create a generator around any [`HttpClient`].
    pub fn with_client(config: &ClientConfig, client: impl Into<Arc<C>>) -> Self {
        Self {
            client: client.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start generating a draft from `source`.
    ///
    /// The source and credential are checked before anything is sent; on
    /// failure no request is made and no callback fires. Must be called from
    /// within a tokio runtime.
    pub fn start<O: DraftObserver>(
        &self,
        source: DraftSource,
        credential: Option<ApiKey>,
        observer: O,
    ) -> Result<GenerationHandle, ValidationError> {
        self.launch(source, credential, None, observer)
    }

    /// Like [`start`](Self::start), but the draft begins at `day_number`.
    ///
    /// A `day_number` event from the service still overrides the seed. Zero is
    /// ignored.
    pub fn start_at_day<O: DraftObserver>(
        &self,
        source: DraftSource,
        credential: Option<ApiKey>,
        day_number: u32,
        observer: O,
    ) -> Result<GenerationHandle, ValidationError> {
        self.launch(source, credential, Some(day_number), observer)
    }

    fn launch<O: DraftObserver>(
        &self,
        source: DraftSource,
        credential: Option<ApiKey>,
        day_number: Option<u32>,
        observer: O,
    ) -> Result<GenerationHandle, ValidationError> {
        source.validate()?;
        let key = credential.ok_or(ValidationError::MissingCredential)?;

        let id = Uuid::new_v4();
        tracing::info!("Starting generation {} from {} input", id, source.kind());

        let shared = Arc::new(Shared::new(Phase::Requesting));
        let task = tokio::spawn(run::run(
            id,
            Arc::clone(&self.client),
            self.base_url.clone(),
            source,
            key,
            day_number,
            Arc::clone(&shared),
            observer,
        ));

        Ok(GenerationHandle::new(id, shared, task))
    }

    /// Ask the service for the next unused day number.
    pub async fn next_day_number(&self, key: &ApiKey) -> DraftResult<u32> {
        let mut headers = Headers::new();
        headers.insert(API_KEY_HEADER.to_string(), key.expose().to_string());

        let url = format!("{}{}", self.base_url, NEXT_DAY_PATH);
        let response = self.client.get(&url, &headers).await?;

        if !response.is_success() {
            return Err(HttpError::ServerError {
                status: response.status,
                message: response.text(),
            }
            .into());
        }

        let body: NextDayResponse = response
            .json()
            .map_err(|e| DraftError::InvalidResponse(e.to_string()))?;
        tracing::debug!("Next day number is {}", body.next_day_number);
        Ok(body.next_day_number)
    }
}
