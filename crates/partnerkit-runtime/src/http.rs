//! HTTP settings source
//!
//! Fetches `partner-settings/{partner_id}.json` relative to the
//! deployment base. The base differs between environments (a configured
//! base path when deployed, the local development address otherwise), so
//! it is resolved once at construction, never assumed.

use crate::error::LoadError;
use crate::source::{SettingsSource, LOCAL_DEV_BASE};
use async_trait::async_trait;
use partnerkit_types::{artifact_rel_path, PartnerSettings};
use std::time::Duration;
use tracing::warn;
use url::Url;

/// Loads published artifacts over HTTP.
pub struct HttpSettingsSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSettingsSource {
    /// Create a source against the given deployment base URL.
    pub fn new(base_url: &str) -> Result<Self, LoadError> {
        Url::parse(base_url)?;
        Ok(Self::with_base(base_url))
    }

    /// Create a source against the local development address.
    pub fn local_dev() -> Self {
        Self::with_base(LOCAL_DEV_BASE)
    }

    fn with_base(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn artifact_url(&self, partner_id: &str) -> String {
        format!("{}/{}", self.base_url, artifact_rel_path(partner_id))
    }

    async fn try_load(&self, partner_id: &str) -> Result<PartnerSettings, LoadError> {
        let response = self.client.get(self.artifact_url(partner_id)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(LoadError::Empty);
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl SettingsSource for HttpSettingsSource {
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
