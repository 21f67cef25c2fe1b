//! Publish command

use crate::error::CliResult;
use colored::Colorize;
use partnerkit_content::ContentStoreClient;
use partnerkit_publish::{PipelineOptions, PublishPipeline, StaticPublisher};
use std::path::PathBuf;

/// Run the full publication batch and print the outcome.
pub async fn execute(client: ContentStoreClient, out_dir: PathBuf, prune: bool) -> CliResult<()> {
    let pipeline = PublishPipeline::new(client, StaticPublisher::new(out_dir))
        .with_options(PipelineOptions { prune_stale: prune });

    let report = pipeline.run().await;

    for partner_id in &report.published {
        println!("{} {}", "✓".green(), partner_id);
    }
    for partner_id in &report.failed {
        println!("{} {}", "✗".red(), partner_id);
    }
    for partner_id in &report.pruned {
        println!("{} {} (pruned)", "-".dimmed(), partner_id);
    }

    println!(
        "\n{} published, {} failed, {} pruned",
        report.published.len(),
        report.failed.len(),
        report.pruned.len()
    );

    if report.published.is_empty() {
        eprintln!("{}", "✗ no partner settings were published".red());
        std::process::exit(1);
    }
    Ok(())
}
