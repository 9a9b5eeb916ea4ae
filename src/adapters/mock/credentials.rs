//! In-memory credentials provider for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::auth::ApiKey;
use crate::traits::{CredentialsError, CredentialsProvider};

/// In-memory credentials provider for testing.
///
/// Stores the key in memory, and can be told to fail loads or saves so callers'
/// error paths can be exercised without touching the file system.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentials {
    key: Arc<Mutex<Option<ApiKey>>>,
    load_should_fail: Arc<Mutex<bool>>,
    save_should_fail: Arc<Mutex<bool>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryCredentials {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider holding `key`.
    pub fn with_key(key: ApiKey) -> Self {
        let provider = Self::default();
        *lock(&provider.key) = Some(key);
        provider
    }

    /// Configure whether load should fail.
    pub fn set_load_should_fail(&self, should_fail: bool) {
        *lock(&self.load_should_fail) = should_fail;
    }

    /// Configure whether save should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *lock(&self.save_should_fail) = should_fail;
    }

    /// Current stored key, bypassing the failure switches.
    pub fn stored(&self) -> Option<ApiKey> {
        lock(&self.key).clone()
    }
}

#[async_trait]
impl CredentialsProvider for InMemoryCredentials {
    async fn load(&self) -> Result<Option<ApiKey>, CredentialsError> {
        if *lock(&self.load_should_fail) {
            return Err(CredentialsError::LoadFailed("Mock load failure".to_string()));
        }
        Ok(lock(&self.key).clone())
    }

    async fn save(&self, key: &ApiKey) -> Result<(), CredentialsError> {
        if *lock(&self.save_should_fail) {
            return Err(CredentialsError::SaveFailed("Mock save failure".to_string()));
        }
        *lock(&self.key) = Some(key.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialsError> {
        *lock(&self.key) = None;
        Ok(())
    }
}
