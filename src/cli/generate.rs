//! `generate` and `next-day` commands.

use color_eyre::eyre::eyre;
use color_eyre::Result;

use super::args::InputArg;
use super::auth::resolve_api_key;
use crate::adapters::{ChannelObserver, DraftUpdate};
use crate::auth::ApiKey;
use crate::config::ClientConfig;
use crate::draft::DraftState;
use crate::error::ValidationError;
use crate::orchestrator::{CancelHandle, DraftGenerator, GenerationOutcome};
use crate::traits::{CredentialsProvider, HttpClient};

/// Turns progress snapshots into status lines, skipping repeats.
#[derive(Debug, Default)]
pub struct ProgressPrinter {
    last: Option<String>,
}

impl ProgressPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The line to print for `state`, or `None` if it did not change.
    pub fn line_for(&mut self, state: &DraftState) -> Option<String> {
        let label = state.progress_label();
        if self.last.as_deref() == Some(label.as_str()) {
            return None;
        }
        self.last = Some(label.clone());
        Some(label)
    }
}

/// Handle `generate`.
///
/// Progress lines go to stderr. `on_start` receives a cancel handle once the
/// request is in flight, so the caller can wire it to Ctrl-C.
pub async fn handle_generate_command<F>(
    config: &ClientConfig,
    credentials: &dyn CredentialsProvider,
    input: InputArg,
    on_start: F,
) -> Result<GenerationOutcome>
where
    F: FnOnce(CancelHandle) -> Result<()>,
{
    let source = input.into_source().map_err(|e| eyre!(e.user_message()))?;
    let key = resolve_api_key(config, credentials).await?;

    let generator = DraftGenerator::new(config)?;
    let (observer, mut updates) = ChannelObserver::new();
    let started = match prefetch_day_number(&generator, key.as_ref()).await {
        Some(day) => generator.start_at_day(source, key, day, observer),
        None => generator.start(source, key, observer),
    };
    let handle = started.map_err(|e: ValidationError| eyre!(e.user_message()))?;
    on_start(handle.canceller())?;

    let printer = tokio::spawn(async move {
        let mut printer = ProgressPrinter::new();
        while let Some(update) = updates.recv().await {
            if let DraftUpdate::Progress(state) = update {
                if let Some(line) = printer.line_for(&state) {
                    eprintln!("{}", line);
                }
            }
        }
    });

    let outcome = handle.wait().await;
    if let Err(e) = printer.await {
        tracing::debug!("Progress printer stopped: {}", e);
    }
    Ok(outcome)
}

/// Day number to seed the draft with. A failed lookup only costs the seed.
async fn prefetch_day_number<C>(generator: &DraftGenerator<C>, key: Option<&ApiKey>) -> Option<u32>
where
    C: HttpClient + ?Sized + 'static,
{
    let key = key?;
    match generator.next_day_number(key).await {
        Ok(day) => Some(day),
        Err(e) => {
            tracing::warn!("Could not fetch next day number [{}]: {}", e.error_code(), e);
            None
        }
    }
}

/// Handle `next-day`.
pub async fn handle_next_day_command(
    config: &ClientConfig,
    credentials: &dyn CredentialsProvider,
) -> Result<u32> {
    let key = resolve_api_key(config, credentials)
        .await?
        .ok_or_else(|| eyre!(ValidationError::MissingCredential.user_message()))?;

    let generator = DraftGenerator::new(config)?;
    generator
        .next_day_number(&key)
        .await
        .map_err(|e| eyre!(e.user_message()))
}
