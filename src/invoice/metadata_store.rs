//! Storage collaborator for bill metadata.
//!
//! Metadata is written once when a bill is created and read back only
//! when that bill's printable document is rendered; it is never mutated
//! in between. The store is injected into the handlers so alternative
//! backings can replace the in-memory one without touching the renderer.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::models::BillMetadata;

/// Keyed storage for render-time bill metadata.
pub trait MetadataStore: Send + Sync {
    /// Returns the metadata stored for a bill, if any.
    fn get(&self, bill_id: Uuid) -> Option<BillMetadata>;

    /// Stores the metadata for a bill, replacing any previous entry.
    fn put(&self, bill_id: Uuid, metadata: BillMetadata);
}

/// A process-local [`MetadataStore`] backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryMetadataStore {
    entries: RwLock<HashMap<Uuid, BillMetadata>>,
}

impl InMemoryMetadataStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetadataStore for InMemoryMetadataStore {
    fn get(&self, bill_id: Uuid) -> Option<BillMetadata> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&bill_id)
            .cloned()
    }

    fn put(&self, bill_id: Uuid, metadata: BillMetadata) {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(bill_id, metadata);
    }
}
