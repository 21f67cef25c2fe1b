//! The settings retrieval seam
//!
//! Exactly one retrieval strategy is active per process, chosen at
//! startup. Earlier iterations of this system grew several ad-hoc
//! loaders with different base-path assumptions; the trait below is the
//! single seam they were unified behind.

use crate::dir::DirSettingsSource;
use crate::http::HttpSettingsSource;
use async_trait::async_trait;
use partnerkit_types::PartnerSettings;
use std::env;
use std::sync::Arc;
use tracing::{info, warn};

/// Address artifacts are served from during local development.
pub const LOCAL_DEV_BASE: &str = "http://localhost:3000";

/// Retrieves one partner's published settings artifact.
///
/// `None` means "no partner-specific settings available"; callers fall
/// back to built-in defaults and must not treat it as fatal.
#[async_trait]
pub trait SettingsSource: Send + Sync {
    async fn load(&self, partner_id: &str) -> Option<PartnerSettings>;
}

/// Choose the retrieval strategy from the environment, once at startup.
///
/// - `PARTNERKIT_SETTINGS_DIR` set - read artifacts from that directory
/// - `PARTNERKIT_BASE_PATH` set - fetch from that deployment base
/// - neither - fetch from the local development address
pub fn source_from_env() -> Arc<dyn SettingsSource> {
    if let Ok(dir) = env::var("PARTNERKIT_SETTINGS_DIR") {
        if !dir.is_empty() {
            info!(%dir, "loading partner settings from directory");
            return Arc::new(DirSettingsSource::new(dir));
        }
    }

    let base = match env::var("PARTNERKIT_BASE_PATH") {
        Ok(base) if !base.is_empty() => base,
        _ => LOCAL_DEV_BASE.to_string(),
    };

    match HttpSettingsSource::new(&base) {
        Ok(source) => {
            info!(%base, "loading partner settings over HTTP");
            Arc::new(source)
        }
        Err(err) => {
            warn!(%base, %err, "invalid settings base path, using local development address");
            Arc::new(HttpSettingsSource::local_dev())
        }
    }
}
