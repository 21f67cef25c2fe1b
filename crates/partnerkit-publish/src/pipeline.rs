//! Build-time publication pipeline

use crate::publisher::StaticPublisher;
use chrono::{DateTime, Utc};
use partnerkit_content::{enumerate_partners, ContentStoreClient};
use partnerkit_types::{merge_with_defaults, PartnerSettings};
use serde::Serialize;
use tracing::{error, info, warn};

/// Pipeline behavior toggles.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Delete artifacts for partners no longer enumerated.
    ///
    /// Off by default: full redeploys replace the output directory
    /// wholesale and need no reconciliation.
    pub prune_stale: bool,
}

/// Outcome of one publication run.
#[derive(Debug, Clone, Serialize)]
pub struct PublishReport {
    /// Partners whose artifact was written
    pub published: Vec<String>,

    /// Partners skipped because fetch or publish failed
    pub failed: Vec<String>,

    /// Stale artifacts deleted by reconciliation
    pub pruned: Vec<String>,

    /// When the run finished
    pub finished_at: DateTime<Utc>,
}

impl PublishReport {
    /// True when every enumerated partner was published.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// The build context: enumerate partners, then fetch, merge, and publish
/// each one.
///
/// Partners are processed sequentially in enumeration order. That is a
/// backpressure policy toward the content store, not an incidental
/// limitation; do not parallelize without replacing it with an explicit
/// rate limit.
pub struct PublishPipeline {
    client: ContentStoreClient,
    publisher: StaticPublisher,
    defaults: PartnerSettings,
    options: PipelineOptions,
}

impl PublishPipeline {
    /// Create a pipeline with default options.
    pub fn new(client: ContentStoreClient, publisher: StaticPublisher) -> Self {
        Self {
            client,
            publisher,
            defaults: PartnerSettings::fallback(),
            options: PipelineOptions::default(),
        }
    }

    /// Override the pipeline options.
    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the full publication batch.
    ///
    /// One partner's failure is logged and skipped; the batch always
    /// continues with the remaining partners.
    pub async fn run(&self) -> PublishReport {
        let partners = enumerate_partners(&self.client).await;
        info!(count = partners.len(), "publishing partner settings");

        let mut published = Vec::new();
        let mut failed = Vec::new();

        for partner_id in &partners {
            let Some(fetched) = self.client.fetch_partner_settings(partner_id).await else {
                error!(%partner_id, "no settings fetched, skipping partner");
                failed.push(partner_id.clone());
                continue;
            };

            let merged = merge_with_defaults(Some(&fetched), &self.defaults);
            match self.publisher.publish(partner_id, &merged).await {
                Ok(_) => published.push(partner_id.clone()),
                Err(err) => {
                    error!(%partner_id, %err, "failed to publish partner settings");
                    failed.push(partner_id.clone());
                }
            }
        }

        let pruned = if self.options.prune_stale {
            self.prune_stale(&partners).await
        } else {
            Vec::new()
        };

        info!(
            published = published.len(),
            failed = failed.len(),
            pruned = pruned.len(),
            "publication run finished"
        );

        PublishReport {
            published,
            failed,
            pruned,
            finished_at: Utc::now(),
        }
    }

    /// Delete artifacts whose partner is no longer enumerated.
    async fn prune_stale(&self, partners: &[String]) -> Vec<String> {
        let existing = match self.publisher.published_partners().await {
            Ok(existing) => existing,
            Err(err) => {
                warn!(%err, "cannot scan artifacts for reconciliation");
                return Vec::new();
            }
        };

        let mut pruned = Vec::new();
        for stale in existing
            .into_iter()
            .filter(|id| !partners.contains(id))
        {
            match self.publisher.remove(&stale).await {
                Ok(()) => {
                    info!(partner_id = %stale, "pruned stale artifact");
                    pruned.push(stale);
                }
                Err(err) => warn!(partner_id = %stale, %err, "failed to prune stale artifact"),
            }
        }
        pruned
    }
}
