//! Content store error types

use thiserror::Error;

/// Errors surfaced by the content store client.
#[derive(Debug, Error)]
pub enum ContentStoreError {
    /// Required access token is not configured
    #[error("missing content store access token")]
    MissingToken,

    /// Configuration value present but unusable
    #[error("invalid content store configuration: {0}")]
    Config(String),

    /// Transport-level failure, including timeouts
    #[error("content store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("content store returned status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Response body does not match the expected structure
    #[error("unexpected content store response shape: {0}")]
    Shape(String),
}
