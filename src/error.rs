//! Unified adapter error types.

use crate::shared::ScalingError;
use thiserror::Error;

/// Top-level adapter error.
///
/// Every core operation either returns a well-formed value or one of these.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("Invalid resolution: {0}")]
    InvalidResolution(String),

    #[error("Pair not found: {token0}/{token1}")]
    PairNotFound { token0: String, token1: String },

    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] ScalingError),

    #[error("Upstream query failed: {0}")]
    UpstreamQueryFailed(#[from] GraphqlError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Subgraph transport and response errors.
#[derive(Error, Debug)]
pub enum GraphqlError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("GraphQL errors: {}", .0.join("; "))]
    Query(Vec<String>),

    #[error("Response carried no data")]
    MissingData,

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl From<serde_json::Error> for GraphqlError {
    fn from(e: serde_json::Error) -> Self {
        GraphqlError::Malformed(e.to_string())
    }
}
