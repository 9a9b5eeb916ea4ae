//! Mock implementations for testing.
//!
//! This module provides mock implementations of the trait abstractions,
//! enabling unit testing without network or file system access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses and streams
//! - [`InMemoryCredentials`] - In-memory key storage
//! - [`RecordingObserver`] - Observer that records every callback

pub mod credentials;
pub mod http;
pub mod observer;

pub use credentials::InMemoryCredentials;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use observer::RecordingObserver;
