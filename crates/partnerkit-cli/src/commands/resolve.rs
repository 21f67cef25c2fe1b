//! Resolve command

use crate::error::CliResult;
use colored::Colorize;
use partnerkit_runtime::{
    footer_copyright, source_from_env, HttpSettingsSource, Resolution, SettingsResolver,
    SettingsSource,
};
use std::sync::Arc;

/// Exercise the runtime loader the way the checkout UI would.
pub async fn execute(partner_id: &str, base_path: Option<&str>) -> CliResult<()> {
    let source: Arc<dyn SettingsSource> = match base_path {
        Some(base) => Arc::new(HttpSettingsSource::new(base)?),
        None => source_from_env(),
    };

    let mut resolver = SettingsResolver::new(source);
    match resolver.resolve(partner_id).await {
        Resolution::Resolved(settings) => {
            println!("{}", serde_json::to_string_pretty(settings)?);
            println!("\n{}", footer_copyright(settings).dimmed());
            Ok(())
        }
        _ => {
            eprintln!(
                "{} could not resolve settings for {partner_id} (retryable)",
                "✗".red()
            );
            std::process::exit(1);
        }
    }
}
