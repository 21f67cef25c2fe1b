//! Content store configuration

use crate::error::ContentStoreError;
use std::env;

/// Hosted content API used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.content.renewhq.com/v1";

/// Which content version to read.
///
/// Production builds read published content; everything else reads
/// drafts so editors can preview unreleased settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentVersion {
    Draft,
    Published,
}

impl ContentVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

/// Connection settings for the content store.
#[derive(Debug, Clone)]
pub struct ContentStoreConfig {
    /// Base URL of the content API, without a trailing slash
    pub base_url: String,

    /// Access token; absence fails individual calls, not construction
    pub token: Option<String>,

    /// Content version selected for every request
    pub version: ContentVersion,
}

impl ContentStoreConfig {
    /// Build a config from explicit values.
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        version: ContentVersion,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            version,
        }
    }

    /// Read the config from the environment.
    ///
    /// - `CONTENT_STORE_TOKEN` - access token
    /// - `PARTNERKIT_ENV` - `production` selects published content
    /// - `CONTENT_STORE_URL` - optional base URL override
    pub fn from_env() -> Result<Self, ContentStoreError> {
        let token = env::var("CONTENT_STORE_TOKEN").ok().filter(|t| !t.is_empty());
        let version = match env::var("PARTNERKIT_ENV").as_deref() {
            Ok("production") => ContentVersion::Published,
            _ => ContentVersion::Draft,
        };
        let base_url = match env::var("CONTENT_STORE_URL") {
            Ok(url) if !url.is_empty() => url,
            _ => DEFAULT_BASE_URL.to_string(),
        };
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ContentStoreError::Config(format!(
                "CONTENT_STORE_URL is not an http(s) URL: {base_url}"
            )));
        }
        Ok(Self::new(base_url, token, version))
    }
}
