//! Fully-populated partner settings
//!
//! A [`PartnerSettings`] value always has every field populated: it is
//! either the value fetched from the content store or the corresponding
//! fallback. Consumers of published artifacts rely on that and do not
//! re-check field presence.

use serde::{Deserialize, Serialize};

/// Header logo with alt text for the checkout chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLogo {
    /// Image reference (URL or asset path)
    pub image: String,

    /// Alt text rendered alongside the image
    pub alt: String,
}

/// Checkout behavior toggles scoped to one partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Where the buyer lands after a completed order
    pub thankyou_page_url: String,

    /// Hide SKU/item codes in the line-item list
    pub hide_item_codes: bool,
}

/// One partner's complete presentation settings.
///
/// Produced once per partner per build by the defaults merger and
/// published as an immutable JSON artifact named after the partner id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerSettings {
    /// Branded header logo
    pub header_logo: HeaderLogo,

    /// Legacy logo reference, used where no header logo is rendered
    pub logo_url: String,

    /// Display name of the partner company
    pub company_name: String,

    /// Support contact email
    pub support_email: String,

    /// Support contact phone
    pub support_phone: String,

    /// Primary brand color token
    pub primary_color: String,

    /// Terms of service link
    pub terms_url: String,

    /// Privacy policy link
    pub privacy_url: String,

    /// Tag manager container id
    pub gtm_id: String,

    /// Display-only order number passed through to the checkout view
    pub order_number: String,

    /// Checkout feature flags
    pub checkout: CheckoutConfig,
}

impl PartnerSettings {
    /// The process-wide fallback record.
    ///
    /// Never mutated; every field here backs the corresponding field of a
    /// partner that did not provide one.
    pub fn fallback() -> Self {
        Self {
            header_logo: HeaderLogo {
                image: "https://cdn.renewhq.com/assets/renew-logo.svg".to_string(),
                alt: "Renew".to_string(),
            },
            logo_url: "https://cdn.renewhq.com/assets/renew-logo.svg".to_string(),
            company_name: "renew".to_string(),
            support_email: "support@renewhq.com".to_string(),
            support_phone: "+1 (888) 555-0142".to_string(),
            primary_color: "#1c4532".to_string(),
            terms_url: "https://www.renewhq.com/terms".to_string(),
            privacy_url: "https://www.renewhq.com/privacy".to_string(),
            gtm_id: String::new(),
            order_number: String::new(),
            checkout: CheckoutConfig {
                thankyou_page_url: "/thank-you".to_string(),
                hide_item_codes: false,
            },
        }
    }
}
