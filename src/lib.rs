// Quire - Archival Finding Aid Export Tool
// Copyright (c) 2025 Quire Contributors
// Licensed under the MIT License

//! # Quire - Archival Finding Aid Export Tool
//!
//! Quire bulk-exports archival description records (finding aids) from a
//! remote catalog service into files on disk, as EAD structured markup or
//! MARCXML catalog records, using a fixed pool of concurrent workers. It
//! runs as a one-shot batch job over a fixed inventory of record
//! identifiers.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (discovery, export pipeline, workspace)
//! - [`adapters`] - The catalog service client
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## The export pipeline
//!
//! The work-item inventory is split into contiguous chunks, one per
//! worker. Each worker runs the fetch-filter-write sequence sequentially
//! over its chunk, retrying each remote fetch exactly once, and delivers
//! its outcomes as a single unit. The coordinator joins on all workers,
//! merges outcomes in arrival order, and builds the run report:
//!
//! ```rust,no_run
//! use quire::adapters::catalog::CatalogSource;
//! use quire::core::export::{ExportCoordinator, ExportOptions};
//! use std::sync::Arc;
//! use std::time::Instant;
//!
//! # async fn example(catalog: Arc<dyn CatalogSource>, options: ExportOptions,
//! #                  items: Vec<quire::domain::WorkItem>) -> quire::domain::Result<()> {
//! let coordinator = ExportCoordinator::new(catalog, options);
//! let report = coordinator.run(items, Instant::now()).await?;
//! println!("{}", report.render());
//! # Ok(())
//! # }
//! ```
//!
//! Per-item failures are captured as [`core::export::ExportOutcome`] data
//! and never abort the run; setup and report-write failures do.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
