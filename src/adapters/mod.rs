//! Concrete implementations of trait abstractions.
//!
//! This module provides production-ready adapters implementing the traits
//! defined in `crate::traits`.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileCredentialsProvider`] - File-based key storage
//! - [`ChannelObserver`] - Forwards draft updates over a tokio channel
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses and streams
//! - [`mock::InMemoryCredentials`] - In-memory key storage
//! - [`mock::RecordingObserver`] - Records every observer callback

pub mod channel_observer;
pub mod file_credentials;
pub mod mock;
pub mod reqwest_http;

pub use channel_observer::{ChannelObserver, DraftUpdate};
pub use file_credentials::FileCredentialsProvider;
pub use mock::{InMemoryCredentials, MockHttpClient, RecordingObserver};
pub use reqwest_http::ReqwestHttpClient;
