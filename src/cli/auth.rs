//! Login, logout and API key resolution.

use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::io;

use crate::auth::ApiKey;
use crate::config::ClientConfig;
use crate::traits::{CredentialsError, CredentialsProvider};

/// Pick the key to use: the configured one, else the stored one.
pub async fn resolve_api_key(
    config: &ClientConfig,
    credentials: &dyn CredentialsProvider,
) -> Result<Option<ApiKey>, CredentialsError> {
    if let Some(key) = &config.api_key {
        tracing::debug!("Using API key from environment");
        return Ok(Some(key.clone()));
    }
    credentials.load().await
}

/// Handle `login`: read a key with `prompt` and store it.
pub async fn handle_login_command<F>(credentials: &dyn CredentialsProvider, prompt: F) -> Result<()>
where
    F: FnOnce() -> io::Result<String>,
{
    let raw = prompt()?;
    let key = ApiKey::new(raw).ok_or_else(|| eyre!("API key cannot be empty"))?;
    credentials.save(&key).await?;
    tracing::info!("API key saved");
    Ok(())
}

/// Handle `logout`: remove the stored key.
pub async fn handle_logout_command(credentials: &dyn CredentialsProvider) -> Result<()> {
    credentials.clear().await?;
    tracing::info!("API key removed");
    Ok(())
}
