//! Partners command

use crate::error::CliResult;
use partnerkit_content::{enumerate_partners, ContentStoreClient};

/// Print the enumerated partner ids, one per line.
pub async fn execute(client: &ContentStoreClient) -> CliResult<()> {
    for partner_id in enumerate_partners(client).await {
        println!("{partner_id}");
    }
    Ok(())
}
