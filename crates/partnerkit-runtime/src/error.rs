//! Runtime load error types
//!
//! These never cross the `SettingsSource` boundary; they classify
//! failures for logging before the source degrades to `None`.

use thiserror::Error;

/// Why a settings artifact could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Configured base path is not a valid URL
    #[error("invalid settings base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// Transport-level failure, including timeouts
    #[error("artifact request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status for the artifact path
    #[error("artifact request returned status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Artifact file is absent or unreadable
    #[error("artifact read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact body was empty
    #[error("artifact body is empty")]
    Empty,

    /// Artifact body is not a valid settings record
    #[error("artifact parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}
