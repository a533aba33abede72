//! Catalog service adapter
//!
//! The [`CatalogSource`] trait is the pipeline's view of the remote
//! catalog; [`HttpCatalog`] is the production HTTP/JSON implementation.

pub mod client;
pub mod models;
pub mod source;

pub use client::HttpCatalog;
pub use source::CatalogSource;
