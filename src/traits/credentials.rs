//! Credentials provider trait abstraction.
//!
//! Provides a trait-based abstraction for API key storage and retrieval,
//! enabling dependency injection and mocking in tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::ApiKey;

/// Credentials operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    /// Failed to load credentials
    #[error("Failed to load credentials: {0}")]
    LoadFailed(String),
    /// Failed to save credentials
    #[error("Failed to save credentials: {0}")]
    SaveFailed(String),
    /// Failed to clear credentials
    #[error("Failed to clear credentials: {0}")]
    ClearFailed(String),
    /// Storage location could not be determined
    #[error("Credentials error: {0}")]
    Other(String),
}

/// Trait for API key storage and retrieval.
///
/// The orchestrator never calls this itself: callers resolve the key and pass it
/// explicitly to [`DraftGenerator::start`](crate::orchestrator::DraftGenerator::start).
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    /// Load the stored key.
    ///
    /// # Returns
    /// - `Ok(Some(key))` if a key is stored
    /// - `Ok(None)` if no key is stored
    /// - `Err(error)` if loading failed
    async fn load(&self) -> Result<Option<ApiKey>, CredentialsError>;

    /// Store a key, replacing any previous one.
    async fn save(&self, key: &ApiKey) -> Result<(), CredentialsError>;

    /// Remove the stored key.
    async fn clear(&self) -> Result<(), CredentialsError>;
}
