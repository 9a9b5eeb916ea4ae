//! File-based credentials provider adapter.
//!
//! Wraps [`CredentialsManager`] and implements [`CredentialsProvider`].
//! The key is stored in `~/.til-draft/credentials.json`.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::auth::{ApiKey, Credentials, CredentialsManager};
use crate::traits::{CredentialsError, CredentialsProvider};

/// File-based credentials provider.
#[derive(Debug)]
pub struct FileCredentialsProvider {
    manager: CredentialsManager,
}

impl FileCredentialsProvider {
    /// Create a provider for the default location.
    ///
    /// # Returns
    /// The provider, or an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CredentialsError> {
        CredentialsManager::new()
            .map(|manager| Self { manager })
            .ok_or_else(|| {
                CredentialsError::Other("Failed to determine home directory".to_string())
            })
    }

    /// Create a provider backed by an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            manager: CredentialsManager::with_path(path),
        }
    }

    /// Get the path to the credentials file.
    pub fn credentials_path(&self) -> &PathBuf {
        self.manager.credentials_path()
    }
}

#[async_trait]
impl CredentialsProvider for FileCredentialsProvider {
    async fn load(&self) -> Result<Option<ApiKey>, CredentialsError> {
        Ok(self.manager.load().api_key)
    }

    async fn save(&self, key: &ApiKey) -> Result<(), CredentialsError> {
        self.manager
            .save(&Credentials::with_key(key.clone()))
            .map_err(|e| CredentialsError::SaveFailed(e.to_string()))
    }

    async fn clear(&self) -> Result<(), CredentialsError> {
        self.manager
            .clear()
            .map_err(|e| CredentialsError::ClearFailed(e.to_string()))
    }
}
