//! API key handling.

pub mod credentials;

pub use credentials::{ApiKey, Credentials, CredentialsManager};
