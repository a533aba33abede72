//! Work-item discovery
//!
//! Resolves the run scope against the catalog service into the fixed
//! inventory the pipeline operates on: the collections involved (for
//! directory setup) and one work item per record to export. Discovery is
//! sequential, single-shot setup; any failure here is run-fatal.

use crate::adapters::catalog::CatalogSource;
use crate::domain::ids::{CollectionId, RecordId};
use crate::domain::{Collection, Result, WorkItem};

/// Optional narrowing of the run to one collection and/or one record.
///
/// A record scope is only meaningful with a collection scope; the CLI
/// rejects the combination record-without-collection before discovery
/// runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportScope {
    /// Restrict the run to this collection
    pub collection: Option<CollectionId>,

    /// Restrict the run to this record (requires `collection`)
    pub record: Option<RecordId>,
}

/// The fixed inventory of a run.
#[derive(Debug)]
pub struct Inventory {
    /// Collections the run touches, in discovery order
    pub collections: Vec<Collection>,

    /// One entry per record to export, in discovery order
    pub items: Vec<WorkItem>,
}

/// Discover the collections and records in scope.
pub async fn discover(catalog: &dyn CatalogSource, scope: &ExportScope) -> Result<Inventory> {
    let collection_ids = match scope.collection {
        Some(id) => vec![id],
        None => catalog.list_collections().await?,
    };

    let mut collections = Vec::with_capacity(collection_ids.len());
    for id in collection_ids {
        collections.push(catalog.get_collection(id).await?);
    }

    tracing::info!(
        collections = collections.len(),
        "Collections returned from catalog"
    );

    let mut items = Vec::new();
    for collection in &collections {
        if let Some(record_id) = scope.record {
            items.push(WorkItem::new(
                collection.id,
                collection.slug.clone(),
                record_id,
            ));
            continue;
        }

        let record_ids = catalog.list_record_ids(collection.id).await?;
        for record_id in record_ids {
            items.push(WorkItem::new(
                collection.id,
                collection.slug.clone(),
                record_id,
            ));
        }
    }

    tracing::info!(records = items.len(), "Records returned from catalog");

    Ok(Inventory { collections, items })
}
