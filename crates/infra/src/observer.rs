//! Settlement side-channel.
//!
//! Observers are told about every gateway as it settles, after its fallback
//! policy has been applied. They cannot influence the outcome.

use tracing::{debug, warn};

use storefront_core::{LookupError, Source};

use crate::fallback::Resolution;

pub trait SettlementObserver: Send + Sync {
    /// Called exactly once per gateway per run, in completion order.
    fn on_settled(&self, source: Source, resolution: Resolution, error: Option<&LookupError>);
}

/// Logs each settlement through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SettlementObserver for TracingObserver {
    fn on_settled(&self, source: Source, resolution: Resolution, error: Option<&LookupError>) {
        let error_kind = error.map(LookupError::kind);
        match resolution {
            Resolution::Found => debug!(%source, "source settled"),
            Resolution::Substituted => warn!(
                %source,
                error = error_kind,
                "lookup failed, continuing with fallback value"
            ),
            Resolution::Propagated => warn!(
                %source,
                error = error_kind,
                "lookup failed for required source"
            ),
        }
    }
}
