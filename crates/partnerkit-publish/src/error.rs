//! Publication error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the static publisher.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Filesystem failure while writing or scanning artifacts
    #[error("artifact IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings record could not be serialized
    #[error("artifact serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Artifact was written but is not present on disk afterwards
    #[error("artifact verification failed: {path} does not exist after write")]
    VerificationFailed {
        /// Expected artifact location
        path: PathBuf,
    },
}
