//! Domain models and types for Quire.
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`CollectionId`], [`RecordId`])
//! - **Catalog models** ([`Record`], [`Collection`], [`WorkItem`])
//! - **Error types** ([`QuireError`], [`CatalogError`])
//! - **Result type alias** ([`Result`])
//!
//! The newtype pattern keeps collection and record ids from being mixed:
//!
//! ```rust
//! use quire::domain::{CollectionId, RecordId};
//!
//! let collection = CollectionId::new(2);
//! let record = RecordId::new(17);
//! // let wrong: CollectionId = record;  // Compile error!
//! ```

pub mod errors;
pub mod ids;
pub mod record;
pub mod result;
pub mod work_item;

// Re-export commonly used types for convenience
pub use errors::{CatalogError, QuireError};
pub use ids::{CollectionId, RecordId};
pub use record::{Collection, Record};
pub use result::Result;
pub use work_item::WorkItem;
