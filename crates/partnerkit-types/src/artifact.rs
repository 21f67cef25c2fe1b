//! Artifact naming
//!
//! One module owns the on-disk and over-the-wire names of published
//! settings artifacts so the publisher and the runtime loader cannot
//! drift apart.

/// Partner id used whenever enumeration fails or yields nothing.
pub const FALLBACK_PARTNER_ID: &str = "whitelabel-test";

/// Directory (and URL path segment) holding one artifact per partner.
pub const ARTIFACT_DIR: &str = "partner-settings";

/// File name of one partner's published artifact.
pub fn artifact_file_name(partner_id: &str) -> String {
    format!("{partner_id}.json")
}

/// Retrieval path of one partner's artifact, relative to the deployment base.
pub fn artifact_rel_path(partner_id: &str) -> String {
    format!("{ARTIFACT_DIR}/{partner_id}.json")
}
