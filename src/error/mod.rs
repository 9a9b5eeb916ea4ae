//! Error types for til-draft.
//!
//! | Type | Raised when | Surfaced as |
//! |------|-------------|-------------|
//! | [`ValidationError`] | Input or credential rejected before any request | `Err` from `start` |
//! | [`StreamError`] | Request rejected, transport failure, upstream `error` event | `on_error` callback |
//! | [`HttpError`] | Transport seam failures | Folded into `StreamError` or `DraftError` |
//! | [`CredentialsError`] | Credential storage failures | `DraftError` |
//!
//! Malformed SSE records are not errors at this level: they are logged and
//! skipped by the framer and interpreter. Cancellation is not an error.

mod draft_error;
mod stream;
mod validation;

pub use draft_error::{DraftError, DraftResult};
pub use stream::{StreamError, DEFAULT_REJECTION_MESSAGE};
pub use validation::ValidationError;

pub use crate::traits::{CredentialsError, HttpError};
