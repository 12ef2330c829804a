//! Backend API access
//!
//! Defines the `SuggestBackend` seam used by the suggestion worker, the
//! `ApiError` type, and the reqwest-based `ApiClient`.

use futures::future::BoxFuture;
use thiserror::Error;

mod client;
mod types;

pub use client::ApiClient;
pub use types::{RecordPayload, SuggestionsPayload};

/// Errors that can occur while talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network error (connect, timeout, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// API returned a non-success status
    #[error("API error ({code}): {message}")]
    Status { code: u16, message: String },

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    Parse(String),

    /// Base URL could not be parsed or joined
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Source of search suggestions and sink for committed terms
///
/// Futures are boxed so the worker can hold the backend as a trait object.
pub trait SuggestBackend: Send + Sync {
    /// Fetch suggestions for a partial query
    fn suggest<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<String>, ApiError>>;

    /// Persist a committed search term for future ranking
    fn record<'a>(&'a self, term: &'a str) -> BoxFuture<'a, Result<(), ApiError>>;
}
