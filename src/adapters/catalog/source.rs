//! Catalog source trait definition
//!
//! [`CatalogSource`] abstracts the remote catalog service behind the
//! operations the exporter needs: inventory discovery (collections and
//! record ids) and per-record retrieval (metadata plus the two export
//! serializations). Workers share one implementation behind an `Arc`, so
//! implementations must be free of per-call mutable state.

use crate::domain::ids::{CollectionId, RecordId};
use crate::domain::{Collection, Record, Result};
use async_trait::async_trait;

/// Read-only interface to the remote catalog service.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// List the ids of all collections in the catalog.
    async fn list_collections(&self) -> Result<Vec<CollectionId>>;

    /// Fetch one collection, including its slug.
    async fn get_collection(&self, id: CollectionId) -> Result<Collection>;

    /// List the ids of all records in a collection.
    async fn list_record_ids(&self, collection: CollectionId) -> Result<Vec<RecordId>>;

    /// Fetch one record's metadata.
    async fn fetch_record(&self, collection: CollectionId, record: RecordId) -> Result<Record>;

    /// Retrieve the record serialized as EAD structured markup.
    ///
    /// `unpublished_notes` asks the service to include descriptive notes
    /// that are not yet published.
    async fn fetch_finding_aid(
        &self,
        collection: CollectionId,
        record: RecordId,
        unpublished_notes: bool,
    ) -> Result<Vec<u8>>;

    /// Retrieve the record serialized as a MARCXML catalog record.
    async fn fetch_catalog_record(
        &self,
        collection: CollectionId,
        record: RecordId,
        unpublished_notes: bool,
    ) -> Result<Vec<u8>>;
}
