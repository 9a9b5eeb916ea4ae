//! Unified error type for library callers.

use thiserror::Error;

use super::stream::StreamError;
use super::validation::ValidationError;
use crate::traits::{CredentialsError, HttpError};

/// Any failure the library can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    /// The service answered with a body we could not read.
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

/// Result alias used by the library's fallible helpers.
pub type DraftResult<T> = Result<T, DraftError>;

impl DraftError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            DraftError::Validation(err) => err.user_message(),
            DraftError::Stream(err) => err.user_message(),
            DraftError::Http(HttpError::ServerError { status: 401, .. }) => {
                "The API key was rejected. Run `til-draft login` again.".to_string()
            }
            DraftError::Http(err) => format!("Request failed: {}", err),
            DraftError::Credentials(err) => err.to_string(),
            DraftError::InvalidResponse(_) => {
                "The service sent a response this client does not understand.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DraftError::Validation(err) => err.error_code(),
            DraftError::Stream(err) => err.error_code(),
            DraftError::Http(_) => "E_HTTP",
            DraftError::Credentials(_) => "E_CREDENTIALS",
            DraftError::InvalidResponse(_) => "E_RESPONSE",
        }
    }
}
