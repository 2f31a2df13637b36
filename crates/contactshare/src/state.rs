//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::identity::IdentityRecord;

/// Shared application state available to all request handlers.
///
/// Read-only after construction; cloning only bumps the `Arc`.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The contact details every response is derived from.
    pub identity: Arc<IdentityRecord>,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> Self {
        Self::from_identity(config.identity)
    }

    /// Create a state directly around a record.
    pub fn from_identity(identity: IdentityRecord) -> Self {
        tracing::info!(name = %identity.name(), "application state initialized");

        Self {
            identity: Arc::new(identity),
        }
    }
}
