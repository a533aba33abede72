//! Description record and collection models
//!
//! These are the shapes consumed from the catalog service. They carry only
//! the fields the export pipeline needs: the canonical URI, the publish
//! flag that drives filtering and output routing, and the external
//! identifier that drives MARCXML filename derivation.

use crate::domain::ids::CollectionId;
use serde::{Deserialize, Serialize};

/// One archival description record (a finding aid) as seen by the exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Canonical URI of the record in the catalog
    pub uri: String,

    /// Record title
    #[serde(default)]
    pub title: String,

    /// External identifier (e.g. the finding aid id), used for MARCXML
    /// filenames
    #[serde(default)]
    pub external_id: String,

    /// Whether the record is published
    #[serde(default)]
    pub publish: bool,
}

/// An administrative grouping of records.
///
/// The slug routes output files into per-collection subdirectories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection identifier
    pub id: CollectionId,

    /// URL-safe collection slug
    pub slug: String,

    /// Display name
    #[serde(default)]
    pub name: String,
}
