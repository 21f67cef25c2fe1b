//! Settings resolution state machine
//!
//! The UI-facing orchestration of one resolution attempt: start in
//! `Loading`, end in `Resolved` or `RetryableError`. There is no
//! automatic retry; re-entering `Loading` is a caller decision.

use crate::source::SettingsSource;
use partnerkit_types::PartnerSettings;
use std::sync::Arc;
use tracing::info;

/// State of one resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Retrieval in flight (or not yet started)
    Loading,

    /// Partner settings are available
    Resolved(PartnerSettings),

    /// Retrieval failed; the caller may retry
    RetryableError,
}

/// Resolver behavior toggles.
///
/// `fallback_to_defaults` is the single policy knob for identifiers with
/// no published artifact: leave it off to surface the retryable error
/// state, turn it on to resolve such partners to the built-in defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolverOptions {
    /// Resolve to the fallback record instead of erroring on a miss
    pub fallback_to_defaults: bool,
}

/// Drives a [`SettingsSource`] into a [`Resolution`].
pub struct SettingsResolver {
    source: Arc<dyn SettingsSource>,
    options: ResolverOptions,
    state: Resolution,
}

impl SettingsResolver {
    /// Create a resolver in the `Loading` state.
    pub fn new(source: Arc<dyn SettingsSource>) -> Self {
        Self {
            source,
            options: ResolverOptions::default(),
            state: Resolution::Loading,
        }
    }

    /// Override the resolver options.
    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Current state.
    pub fn state(&self) -> &Resolution {
        &self.state
    }

    /// True while no attempt has completed.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, Resolution::Loading)
    }

    /// The resolved settings, if resolution succeeded.
    pub fn settings(&self) -> Option<&PartnerSettings> {
        match &self.state {
            Resolution::Resolved(settings) => Some(settings),
            _ => None,
        }
    }

    /// Run one resolution attempt.
    ///
    /// Only transitions out of `Loading`; once terminal, the state is
    /// returned unchanged until [`retry_on_error`](Self::retry_on_error)
    /// re-enters `Loading`.
    pub async fn resolve(&mut self, partner_id: &str) -> &Resolution {
        if !self.is_loading() {
            return &self.state;
        }

        self.state = match self.source.load(partner_id).await {
            Some(settings) => Resolution::Resolved(settings),
            None if self.options.fallback_to_defaults => {
                info!(partner_id, "no artifact found, resolving to default settings");
                Resolution::Resolved(PartnerSettings::fallback())
            }
            None => Resolution::RetryableError,
        };
        &self.state
    }

    /// Re-enter `Loading` after a retryable error.
    ///
    /// Returns whether a new attempt was started.
    pub fn retry_on_error(&mut self) -> bool {
        if matches!(self.state, Resolution::RetryableError) {
            self.state = Resolution::Loading;
            true
        } else {
            false
        }
    }
}
