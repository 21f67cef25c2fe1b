//! Static artifact publisher

use crate::error::PublishError;
use partnerkit_types::{artifact_file_name, PartnerSettings};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// Writes merged settings records as static JSON artifacts.
///
/// One file per partner under the output directory, named after the
/// partner id. Re-publishing overwrites unconditionally: last build wins,
/// there is no versioning.
pub struct StaticPublisher {
    out_dir: PathBuf,
}

impl StaticPublisher {
    /// Create a publisher targeting the given output directory.
    ///
    /// The directory does not have to exist yet; it is created on first
    /// publish.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Output directory holding the artifacts.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Path of one partner's artifact.
    pub fn artifact_path(&self, partner_id: &str) -> PathBuf {
        self.out_dir.join(artifact_file_name(partner_id))
    }

    /// Write one partner's merged settings to disk.
    ///
    /// Ensures the output directory exists, writes the pretty-printed
    /// JSON artifact, and verifies the file is present afterwards.
    pub async fn publish(
        &self,
        partner_id: &str,
        settings: &PartnerSettings,
    ) -> Result<PathBuf, PublishError> {
        fs::create_dir_all(&self.out_dir).await?;

        let path = self.artifact_path(partner_id);
        let body = serde_json::to_vec_pretty(settings)?;
        fs::write(&path, &body).await?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(PublishError::VerificationFailed { path });
        }

        info!(partner_id, path = %path.display(), "wrote partner settings artifact");
        Ok(path)
    }

    /// Partner ids that currently have a published artifact.
    pub async fn published_partners(&self) -> Result<Vec<String>, PublishError> {
        if !fs::try_exists(&self.out_dir).await.unwrap_or(false) {
            return Ok(Vec::new());
        }

        let mut partners = Vec::new();
        let mut entries = fs::read_dir(&self.out_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    partners.push(stem.to_string());
                }
            }
        }
        partners.sort();
        Ok(partners)
    }

    /// Delete one partner's artifact, if present.
    pub async fn remove(&self, partner_id: &str) -> Result<(), PublishError> {
        let path = self.artifact_path(partner_id);
        if fs::try_exists(&path).await.unwrap_or(false) {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }
}
