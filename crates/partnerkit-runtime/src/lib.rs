//! Runtime settings retrieval and resolution
//!
//! Request-time side of the partner settings system:
//! - [`SettingsSource`] - the one retrieval seam, with an HTTP
//!   implementation for deployed/browser-adjacent contexts and a
//!   directory implementation for server-side contexts and tests
//! - [`SettingsResolver`] - the tri-state resolution machine the
//!   checkout UI consumes (loading / resolved / retryable error)
//! - [`footer_copyright`] - the one presentation helper layered on a
//!   resolved record
//!
//! A missing or unreadable artifact is never fatal here: sources degrade
//! to `None` and the resolver surfaces a retryable error state.

pub mod dir;
pub mod display;
pub mod error;
pub mod http;
pub mod resolver;
pub mod source;

pub use dir::DirSettingsSource;
pub use display::footer_copyright;
pub use error::LoadError;
pub use http::HttpSettingsSource;
pub use resolver::{Resolution, ResolverOptions, SettingsResolver};
pub use source::{source_from_env, SettingsSource, LOCAL_DEV_BASE};
