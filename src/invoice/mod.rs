//! Invoice rendering and the render-time metadata sidecar.
//!
//! Bills persist only the fields the ledger needs; everything else the
//! printable document shows (company identity, GST registration numbers,
//! line items, payment details) lives in a [`BillMetadata`] sidecar kept
//! by a [`MetadataStore`]. The renderer is a pure function over a bill
//! and its metadata; it performs no lookups of its own.
//!
//! [`BillMetadata`]: crate::models::BillMetadata

mod metadata_store;
mod renderer;

pub use metadata_store::{InMemoryMetadataStore, MetadataStore};
pub use renderer::render_invoice;
