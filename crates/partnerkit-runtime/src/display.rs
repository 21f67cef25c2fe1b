//! Presentation helpers layered on resolved settings
//!
//! Kept at the UI boundary on purpose: the resolution core knows nothing
//! about footer copy. Only fields of the resolved record are consumed.

use chrono::{Datelike, Utc};
use partnerkit_types::PartnerSettings;

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Footer copyright line for the checkout chrome.
///
/// Interpolates the capitalized partner company name and the current
/// year.
pub fn footer_copyright(settings: &PartnerSettings) -> String {
    format!(
        "© {} {}. All rights reserved.",
        Utc::now().year(),
        capitalize(&settings.company_name)
    )
}
