//! Partner enumeration
//!
//! The static publication step must produce at least one artifact, so
//! enumeration never yields an empty set: every failure degrades to a
//! singleton list holding the well-known fallback partner.

use crate::client::ContentStoreClient;
use partnerkit_types::FALLBACK_PARTNER_ID;
use tracing::{error, info};

fn fallback_partners(cause: &str) -> Vec<String> {
    error!(cause, "unable to enumerate partners");
    info!(partner_id = FALLBACK_PARTNER_ID, "using fallback partner");
    vec![FALLBACK_PARTNER_ID.to_string()]
}

/// Derive the authoritative partner id list from the content store.
///
/// The result is guaranteed non-empty. Listing failures and empty
/// listings are logged and replaced by `[FALLBACK_PARTNER_ID]`.
pub async fn enumerate_partners(client: &ContentStoreClient) -> Vec<String> {
    match client.list_partner_items().await {
        Ok(items) if items.is_empty() => fallback_partners("content store returned no items"),
        Ok(items) => items.into_iter().map(|item| item.slug).collect(),
        Err(err) => fallback_partners(&err.to_string()),
    }
}
