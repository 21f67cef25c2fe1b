//! Show command

use crate::error::CliResult;
use colored::Colorize;
use partnerkit_content::ContentStoreClient;
use partnerkit_types::{merge_with_defaults, PartnerSettings};

/// Print the merged record one partner would be published with.
pub async fn execute(client: &ContentStoreClient, partner_id: &str) -> CliResult<()> {
    let fetched = client.fetch_partner_settings(partner_id).await;
    if fetched.is_none() {
        eprintln!(
            "{} no content for {partner_id}, showing default settings",
            "!".yellow()
        );
    }

    let merged = merge_with_defaults(fetched.as_ref(), &PartnerSettings::fallback());
    println!("{}", serde_json::to_string_pretty(&merged)?);
    Ok(())
}
