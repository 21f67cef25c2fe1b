//! Directory settings source
//!
//! Reads published artifacts straight from the output directory. Used in
//! server-side contexts that share a filesystem with the build output,
//! and in tests.

use crate::error::LoadError;
use crate::source::SettingsSource;
use async_trait::async_trait;
use partnerkit_types::{artifact_file_name, PartnerSettings};
use std::path::PathBuf;
use tokio::fs;
use tracing::warn;

/// Loads published artifacts from a local directory.
pub struct DirSettingsSource {
    root: PathBuf,
}

impl DirSettingsSource {
    /// Create a source rooted at the artifact directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn try_load(&self, partner_id: &str) -> Result<PartnerSettings, LoadError> {
        let path = self.root.join(artifact_file_name(partner_id));
        let body = fs::read(&path).await?;
        if body.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl SettingsSource for DirSettingsSource {
    async fn load(&self, partner_id: &str) -> Option<PartnerSettings> {
        match self.try_load(partner_id).await {
            Ok(settings) => Some(settings),
            Err(err) => {
                warn!(partner_id, %err, "no partner settings artifact available");
                None
            }
        }
    }
}
