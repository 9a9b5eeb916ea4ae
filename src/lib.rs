//! til-draft - Streaming client for AI-generated TIL drafts
//!
//! This library exposes modules for use in integration tests and benchmarks.

pub mod adapters;
pub mod auth;
pub mod cli;
pub mod config;
pub mod draft;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod sse;
pub mod traits;
