//! CLI error types

use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Content store access failed
    #[error("content store error: {0}")]
    Content(#[from] partnerkit_content::ContentStoreError),

    /// Runtime loader misconfiguration
    #[error("load error: {0}")]
    Load(#[from] partnerkit_runtime::LoadError),

    /// JSON printing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
