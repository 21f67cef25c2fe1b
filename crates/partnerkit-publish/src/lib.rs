//! Static publication pipeline
//!
//! Build-time side of the partner settings system:
//! - [`StaticPublisher`] - writes one merged settings artifact per
//!   partner to a deterministic location, idempotently
//! - [`PublishPipeline`] - enumerate, fetch, merge, publish; sequential
//!   and partial-failure tolerant
//!
//! The pipeline is an explicit context object threaded through the run.
//! Nothing here is process-global, so builds are testable and reentrant.

pub mod error;
pub mod pipeline;
pub mod publisher;

pub use error::PublishError;
pub use pipeline::{PipelineOptions, PublishPipeline, PublishReport};
pub use publisher::StaticPublisher;
