//! Defaults merger
//!
//! Pure field-level override: the fetched value wins when it is present
//! and non-empty, the fallback value fills every gap. The result never
//! has a missing field, which is the invariant the rest of the pipeline
//! builds on.

use crate::partial::PartialPartnerSettings;
use crate::settings::{CheckoutConfig, HeaderLogo, PartnerSettings};

fn pick(fetched: Option<&String>, default: &str) -> String {
    match fetched {
        Some(value) if !value.is_empty() => value.clone(),
        _ => default.to_string(),
    }
}

/// Merge a fetched record with the fallback record.
///
/// `merge_with_defaults(None, d)` equals `d`, and the operation is
/// idempotent: merging an already-merged record changes nothing.
pub fn merge_with_defaults(
    fetched: Option<&PartialPartnerSettings>,
    defaults: &PartnerSettings,
) -> PartnerSettings {
    let Some(fetched) = fetched else {
        return defaults.clone();
    };

    let header_logo = match &fetched.header_logo {
        Some(logo) => HeaderLogo {
            image: pick(logo.image.as_ref(), &defaults.header_logo.image),
            alt: pick(logo.alt.as_ref(), &defaults.header_logo.alt),
        },
        None => defaults.header_logo.clone(),
    };

    let checkout = match &fetched.checkout {
        Some(config) => CheckoutConfig {
            thankyou_page_url: pick(
                config.thankyou_page_url.as_ref(),
                &defaults.checkout.thankyou_page_url,
            ),
            hide_item_codes: config
                .hide_item_codes
                .unwrap_or(defaults.checkout.hide_item_codes),
        },
        None => defaults.checkout.clone(),
    };

    PartnerSettings {
        header_logo,
        logo_url: pick(fetched.logo_url.as_ref(), &defaults.logo_url),
        company_name: pick(fetched.company_name.as_ref(), &defaults.company_name),
        support_email: pick(fetched.support_email.as_ref(), &defaults.support_email),
        support_phone: pick(fetched.support_phone.as_ref(), &defaults.support_phone),
        primary_color: pick(fetched.primary_color.as_ref(), &defaults.primary_color),
        terms_url: pick(fetched.terms_url.as_ref(), &defaults.terms_url),
        privacy_url: pick(fetched.privacy_url.as_ref(), &defaults.privacy_url),
        gtm_id: pick(fetched.gtm_id.as_ref(), &defaults.gtm_id),
        order_number: pick(fetched.order_number.as_ref(), &defaults.order_number),
        checkout,
    }
}
