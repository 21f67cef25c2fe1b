//! End-to-end publication pipeline tests against an HTTP double.

use partnerkit_content::{ContentStoreClient, ContentStoreConfig, ContentVersion};
use partnerkit_publish::{PipelineOptions, PublishPipeline, StaticPublisher};
use partnerkit_types::PartnerSettings;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ContentStoreClient {
    let config = ContentStoreConfig::new(
        server.uri(),
        Some("tok".to_string()),
        ContentVersion::Published,
    );
    ContentStoreClient::new(config).unwrap()
}

async fn mount_listing(server: &MockServer, slugs: &[&str]) {
    let items: Vec<_> = slugs.iter().map(|slug| json!({ "slug": slug })).collect();
    Mock::given(method("GET"))
        .and(path("/content-items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": items })))
        .mount(server)
        .await;
}

async fn mount_settings(server: &MockServer, partner_id: &str, content: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/content-items/{partner_id}/_settings")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "story": { "content": content } })),
        )
        .mount(server)
        .await;
}

fn read_artifact(dir: &TempDir, partner_id: &str) -> PartnerSettings {
    let raw = std::fs::read_to_string(dir.path().join(format!("{partner_id}.json"))).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[tokio::test]
async fn publishes_one_artifact_per_enumerated_partner() {
    let server = MockServer::start().await;
    mount_listing(&server, &["acme", "globex", "initech"]).await;
    for partner in ["acme", "globex", "initech"] {
        mount_settings(&server, partner, json!({ "company_name": partner })).await;
    }

    let dir = TempDir::new().unwrap();
    let pipeline = PublishPipeline::new(client_for(&server), StaticPublisher::new(dir.path()));
    let report = pipeline.run().await;

    assert_eq!(report.published, vec!["acme", "globex", "initech"]);
    assert!(report.is_complete());

    for partner in ["acme", "globex", "initech"] {
        let settings = read_artifact(&dir, partner);
        assert_eq!(settings.company_name, partner);
    }
}

#[tokio::test]
async fn merged_artifacts_backfill_missing_fields() {
    let server = MockServer::start().await;
    mount_listing(&server, &["acme"]).await;
    mount_settings(
        &server,
        "acme",
        json!({
            "company_name": "Acme Corp",
            "support_email": "help@acme.example"
        }),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let pipeline = PublishPipeline::new(client_for(&server), StaticPublisher::new(dir.path()));
    pipeline.run().await;

    let defaults = PartnerSettings::fallback();
    let settings = read_artifact(&dir, "acme");
    assert_eq!(settings.company_name, "Acme Corp");
    assert_eq!(settings.support_email, "help@acme.example");
    assert_eq!(settings.support_phone, defaults.support_phone);
    assert_eq!(settings.checkout, defaults.checkout);
}

#[tokio::test]
async fn one_failing_partner_does_not_stop_the_batch() {
    let server = MockServer::start().await;
    mount_listing(&server, &["acme", "globex", "initech"]).await;
    mount_settings(&server, "acme", json!({ "company_name": "Acme Corp" })).await;
    Mock::given(method("GET"))
        .and(path("/content-items/globex/_settings"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_settings(&server, "initech", json!({ "company_name": "Initech" })).await;

    let dir = TempDir::new().unwrap();
    let pipeline = PublishPipeline::new(client_for(&server), StaticPublisher::new(dir.path()));
    let report = pipeline.run().await;

    assert_eq!(report.published, vec!["acme", "initech"]);
    assert_eq!(report.failed, vec!["globex"]);
    assert!(!report.is_complete());
    assert!(!dir.path().join("globex.json").exists());
}

#[tokio::test]
async fn enumeration_failure_degrades_to_the_fallback_partner() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/content-items"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_settings(&server, "whitelabel-test", json!({ "company_name": "Whitelabel" })).await;

    let dir = TempDir::new().unwrap();
    let pipeline = PublishPipeline::new(client_for(&server), StaticPublisher::new(dir.path()));
    let report = pipeline.run().await;

    assert_eq!(report.published, vec!["whitelabel-test"]);
    assert_eq!(read_artifact(&dir, "whitelabel-test").company_name, "Whitelabel");
}

#[tokio::test]
async fn prune_removes_artifacts_for_partners_no_longer_enumerated() {
    let server = MockServer::start().await;
    mount_listing(&server, &["acme"]).await;
    mount_settings(&server, "acme", json!({ "company_name": "Acme Corp" })).await;

    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("defunct.json"),
        serde_json::to_vec(&PartnerSettings::fallback()).unwrap(),
    )
    .unwrap();

    let pipeline = PublishPipeline::new(client_for(&server), StaticPublisher::new(dir.path()))
        .with_options(PipelineOptions { prune_stale: true });
    let report = pipeline.run().await;

    assert_eq!(report.pruned, vec!["defunct"]);
    assert!(!dir.path().join("defunct.json").exists());
    assert!(dir.path().join("acme.json").exists());
}

#[tokio::test]
async fn stale_artifacts_persist_without_prune() {
    let server = MockServer::start().await;
    mount_listing(&server, &["acme"]).await;
    mount_settings(&server, "acme", json!({ "company_name": "Acme Corp" })).await;

    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("defunct.json"),
        serde_json::to_vec(&PartnerSettings::fallback()).unwrap(),
    )
    .unwrap();

    let pipeline = PublishPipeline::new(client_for(&server), StaticPublisher::new(dir.path()));
    let report = pipeline.run().await;

    assert!(report.pruned.is_empty());
    assert!(dir.path().join("defunct.json").exists());
}
