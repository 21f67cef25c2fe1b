//! Partner settings model
//!
//! The shared vocabulary of the partner settings pipeline:
//! - [`PartnerSettings`] - the fully-populated record published per partner
//! - [`PartialPartnerSettings`] - the possibly-incomplete record fetched
//!   from the content store
//! - [`merge_with_defaults`] - the completeness-guaranteeing merger
//! - artifact naming shared by the publisher and the runtime loader

pub mod artifact;
pub mod merge;
pub mod partial;
pub mod settings;

pub use artifact::{artifact_file_name, artifact_rel_path, ARTIFACT_DIR, FALLBACK_PARTNER_ID};
pub use merge::merge_with_defaults;
pub use partial::{PartialCheckoutConfig, PartialHeaderLogo, PartialPartnerSettings};
pub use settings::{CheckoutConfig, HeaderLogo, PartnerSettings};
