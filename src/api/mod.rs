//! HTTP client for the remote simulation engine.

mod client;

pub use client::{ApiError, EngineClient};
