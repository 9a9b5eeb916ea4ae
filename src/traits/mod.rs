//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP operations (GET, streaming POST)
//! - [`CredentialsProvider`] - API key storage and retrieval
//! - [`DraftObserver`] - Progress and result callbacks for one generation

pub mod credentials;
pub mod http;
pub mod observer;

pub use credentials::{CredentialsError, CredentialsProvider};
pub use http::{ByteStream, Headers, HttpClient, HttpError, RequestBody, Response};
pub use observer::DraftObserver;
