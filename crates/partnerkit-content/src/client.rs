//! HTTP client for the content store

use crate::config::ContentStoreConfig;
use crate::error::ContentStoreError;
use partnerkit_types::PartialPartnerSettings;
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, warn};

/// Content type whose items define the partner set.
const PARTNER_CONTENT_TYPE: &str = "Homepage";

/// Name of the per-partner settings sub-resource.
const SETTINGS_RESOURCE: &str = "_settings";

/// One entry of the content item listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    /// Partner identifier, also the artifact file name stem
    pub slug: String,
}

/// Client for the content store HTTP API.
///
/// Stateless between calls; every request carries the configured token
/// and content version and is bounded by a 30 second timeout.
pub struct ContentStoreClient {
    client: reqwest::Client,
    config: ContentStoreConfig,
}

impl ContentStoreClient {
    /// Create a client from the given config.
    pub fn new(config: ContentStoreConfig) -> Result<Self, ContentStoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client, config })
    }

    fn token(&self) -> Result<&str, ContentStoreError> {
        self.config
            .token
            .as_deref()
            .ok_or(ContentStoreError::MissingToken)
    }

    /// List the content items that define the partner set.
    ///
    /// `GET {base}/content-items?content_type=Homepage&version=...&token=...`
    pub async fn list_partner_items(&self) -> Result<Vec<ContentItem>, ContentStoreError> {
        let token = self.token()?;
        let url = format!("{}/content-items", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("content_type", PARTNER_CONTENT_TYPE),
                ("version", self.config.version.as_str()),
                ("token", token),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentStoreError::Status {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ContentStoreError::Shape(format!("listing body is not JSON: {e}")))?;
        let items = body
            .get("items")
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                ContentStoreError::Shape("listing body has no `items` array".to_string())
            })?;

        serde_json::from_value(serde_json::Value::Array(items.clone()))
            .map_err(|e| ContentStoreError::Shape(format!("listing items are malformed: {e}")))
    }

    /// Fetch one partner's settings sub-resource.
    ///
    /// `GET {base}/content-items/{partner_id}/_settings?version=...&token=...`
    /// with the payload nested under `story.content`.
    ///
    /// Degrades to `None` on every failure. The caller only needs to know
    /// whether partner-specific settings exist; the cause is logged here
    /// with the partner id.
    pub async fn fetch_partner_settings(&self, partner_id: &str) -> Option<PartialPartnerSettings> {
        let token = match self.token() {
            Ok(token) => token,
            Err(_) => {
                error!(partner_id, "missing content store token, cannot fetch settings");
                return None;
            }
        };

        let url = format!(
            "{}/content-items/{partner_id}/{SETTINGS_RESOURCE}",
            self.config.base_url
        );

        let response = match self
            .client
            .get(&url)
            .query(&[
                ("version", self.config.version.as_str()),
                ("token", token),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                error!(partner_id, %err, "content store request failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!(
                partner_id,
                status = status.as_u16(),
                "failed to fetch partner settings"
            );
            return None;
        }

        let body: serde_json::Value = match response.json().await {
            Ok(body) => body,
            Err(err) => {
                error!(partner_id, %err, "settings response is not JSON");
                return None;
            }
        };

        let content = match body.pointer("/story/content") {
            Some(content) => content.clone(),
            None => {
                warn!(partner_id, "settings response has no story.content payload");
                return None;
            }
        };

        match serde_json::from_value(content) {
            Ok(settings) => Some(settings),
            Err(err) => {
                error!(partner_id, %err, "settings payload is malformed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContentVersion;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, token: Option<&str>) -> ContentStoreClient {
        let config = ContentStoreConfig::new(
            server.uri(),
            token.map(str::to_string),
            ContentVersion::Published,
        );
        ContentStoreClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn listing_returns_items_with_slugs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/content-items"))
            .and(query_param("content_type", "Homepage"))
            .and(query_param("version", "published"))
            .and(query_param("token", "tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{ "slug": "acme" }, { "slug": "globex" }]
            })))
            .mount(&server)
            .await;

        let items = client_for(&server, Some("tok"))
            .list_partner_items()
            .await
            .unwrap();
        let slugs: Vec<_> = items.into_iter().map(|i| i.slug).collect();
        assert_eq!(slugs, vec!["acme", "globex"]);
    }

    #[tokio::test]
    async fn listing_without_token_is_a_config_error() {
        let server = MockServer::start().await;
        let err = client_for(&server, None).list_partner_items().await;
        assert!(matches!(err, Err(ContentStoreError::MissingToken)));
    }

    #[tokio::test]
    async fn listing_maps_http_status_to_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/content-items"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server, Some("tok")).list_partner_items().await;
        assert!(matches!(
            err,
            Err(ContentStoreError::Status { status: 503 })
        ));
    }

    #[tokio::test]
    async fn listing_without_items_array_is_a_shape_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/content-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "stories": [] })))
            .mount(&server)
            .await;

        let err = client_for(&server, Some("tok")).list_partner_items().await;
        assert!(matches!(err, Err(ContentStoreError::Shape(_))));
    }

    #[tokio::test]
    async fn fetch_reads_payload_from_story_content() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/content-items/acme/_settings"))
            .and(query_param("version", "published"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "story": {
                    "content": {
                        "company_name": "Acme Corp",
                        "support_email": "help@acme.example"
                    }
                }
            })))
            .mount(&server)
            .await;

        let settings = client_for(&server, Some("tok"))
            .fetch_partner_settings("acme")
            .await
            .unwrap();
        assert_eq!(settings.company_name.as_deref(), Some("Acme Corp"));
        assert_eq!(settings.support_email.as_deref(), Some("help@acme.example"));
        assert_eq!(settings.support_phone, None);
    }

    #[tokio::test]
    async fn fetch_degrades_to_none_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/content-items/globex/_settings"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let settings = client_for(&server, Some("tok"))
            .fetch_partner_settings("globex")
            .await;
        assert!(settings.is_none());
    }

    #[tokio::test]
    async fn fetch_degrades_to_none_without_story_content() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/content-items/acme/_settings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "story": {} })))
            .mount(&server)
            .await;

        let settings = client_for(&server, Some("tok"))
            .fetch_partner_settings("acme")
            .await;
        assert!(settings.is_none());
    }

    #[tokio::test]
    async fn fetch_degrades_to_none_without_token() {
        let server = MockServer::start().await;
        let settings = client_for(&server, None).fetch_partner_settings("acme").await;
        assert!(settings.is_none());
    }
}
