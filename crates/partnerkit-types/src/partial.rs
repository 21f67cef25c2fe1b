//! Partially-populated settings as fetched from the content store
//!
//! Everything is optional here. Authors fill in what they need in the
//! content store; the merger backfills the rest. Unknown fields in the
//! payload are ignored rather than rejected.

use serde::{Deserialize, Serialize};

/// Header logo as authored, possibly without alt text or image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialHeaderLogo {
    pub image: Option<String>,
    pub alt: Option<String>,
}

/// Checkout toggles as authored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialCheckoutConfig {
    pub thankyou_page_url: Option<String>,
    pub hide_item_codes: Option<bool>,
}

/// Partner settings as they come back from the content store.
///
/// Deserialized from the `story.content` payload of the partner's
/// `_settings` sub-resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialPartnerSettings {
    pub header_logo: Option<PartialHeaderLogo>,
    pub logo_url: Option<String>,
    pub company_name: Option<String>,
    pub support_email: Option<String>,
    pub support_phone: Option<String>,
    pub primary_color: Option<String>,
    pub terms_url: Option<String>,
    pub privacy_url: Option<String>,
    pub gtm_id: Option<String>,
    pub order_number: Option<String>,
    pub checkout: Option<PartialCheckoutConfig>,
}
