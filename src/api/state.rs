//! Application state for the payroll and billing engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::invoice::MetadataStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded billing profile and the bill metadata store.
#[derive(Clone)]
pub struct AppState {
    /// The loaded billing profile.
    config: Arc<ConfigLoader>,
    /// The render-time bill metadata store.
    metadata: Arc<dyn MetadataStore>,
}

impl AppState {
    /// Creates a new application state from a billing profile and a
    /// metadata store.
    pub fn new(config: ConfigLoader, metadata: Arc<dyn MetadataStore>) -> Self {
        Self {
            config: Arc::new(config),
            metadata,
        }
    }

    /// Returns a reference to the billing profile.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the metadata store.
    pub fn metadata(&self) -> &dyn MetadataStore {
        self.metadata.as_ref()
    }
}
