//! Export command implementation
//!
//! Sequential setup (flags, config, workspace, catalog client, discovery)
//! followed by the concurrent export pipeline. Every validation happens
//! before the first remote call; every setup failure maps to a distinct
//! exit code so the command scripts cleanly.

use crate::adapters::catalog::{CatalogSource, HttpCatalog};
use crate::cli::RunContext;
use crate::config::load_config;
use crate::core::export::{ExportCoordinator, ExportFormat, ExportOptions};
use crate::core::inventory::{self, ExportScope};
use crate::core::workspace;
use crate::domain::ids::{CollectionId, RecordId};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format: `ead` or `marc`
    #[arg(long)]
    pub format: String,

    /// ID of a single collection to export (default: all collections)
    #[arg(long)]
    pub collection: Option<u32>,

    /// ID of a single record to export (requires --collection)
    #[arg(long, requires = "collection")]
    pub record: Option<u32>,

    /// Location to export finding aids (default: a fresh timestamped
    /// directory under the current directory)
    #[arg(long)]
    pub export_location: Option<PathBuf>,

    /// Number of concurrent export workers
    #[arg(long)]
    pub workers: Option<usize>,

    /// Catalog client timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Include unpublished notes in exports
    #[arg(long)]
    pub include_unpublished_notes: bool,

    /// Include unpublished records in exports
    #[arg(long)]
    pub include_unpublished_records: bool,

    /// Tab-reformat exported EAD files with xmllint
    #[arg(long)]
    pub reformat: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str, run: &RunContext) -> anyhow::Result<i32> {
        // Validate the format before anything else touches the network.
        let format: ExportFormat = match self.format.parse() {
            Ok(format) => format,
            Err(e) => {
                tracing::error!(format = %self.format, "Unsupported export format");
                eprintln!("{e}");
                return Ok(2);
            }
        };

        let mut config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        if let Some(timeout) = self.timeout {
            config.catalog.timeout_seconds = timeout;
        }

        let workers = self.workers.unwrap_or(config.export.workers);
        if workers == 0 {
            eprintln!("--workers must be at least 1");
            return Ok(2);
        }

        tracing::info!("All mandatory options set");

        // Resolve the output root. The auto-generated default must be
        // fresh; an explicit location must already exist.
        let work_dir = match &self.export_location {
            Some(location) => location.clone(),
            None => {
                let path = PathBuf::from(format!("quire-exports-{}", run.timestamp));
                if let Err(e) = workspace::create_work_dir(&path) {
                    tracing::error!(error = %e, "Could not create work directory");
                    eprintln!("{e}");
                    return Ok(3);
                }
                tracing::info!(path = %path.display(), "Work directory created");
                path
            }
        };

        if let Err(e) = workspace::check_path(&work_dir) {
            tracing::error!(error = %e, "Export location is not usable");
            eprintln!("{e}");
            return Ok(3);
        }

        let work_dir = match work_dir.canonicalize() {
            Ok(path) => path,
            Err(e) => {
                eprintln!("Could not resolve export location: {e}");
                return Ok(3);
            }
        };
        tracing::info!(path = %work_dir.display(), "Exporting to");

        // Catalog client, shared read-only across workers.
        let mut catalog = match HttpCatalog::new(config.catalog) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create catalog client");
                eprintln!("Failed to create catalog client: {e}");
                return Ok(4);
            }
        };
        if let Err(e) = catalog.authenticate().await {
            tracing::error!(error = %e, "Catalog authentication failed");
            eprintln!("Catalog authentication failed: {e}");
            return Ok(4);
        }
        tracing::info!(base_url = catalog.base_url(), "Catalog client ready");
        let catalog: Arc<dyn CatalogSource> = Arc::new(catalog);

        // Discovery: resolve the scope into the fixed work inventory.
        let scope = ExportScope {
            collection: self.collection.map(CollectionId::new),
            record: self.record.map(RecordId::new),
        };
        let inventory = match inventory::discover(catalog.as_ref(), &scope).await {
            Ok(inventory) => inventory,
            Err(e) => {
                tracing::error!(error = %e, "Discovery failed");
                eprintln!("Discovery failed: {e}");
                return Ok(5);
            }
        };

        if let Err(e) = workspace::create_export_dirs(
            &work_dir,
            &inventory.collections,
            self.include_unpublished_records,
        ) {
            tracing::error!(error = %e, "Could not create export directories");
            eprintln!("{e}");
            return Ok(3);
        }

        let options = ExportOptions {
            work_dir: work_dir.clone(),
            format,
            unpublished_notes: self.include_unpublished_notes,
            unpublished_records: self.include_unpublished_records,
            workers,
            reformat: self.reformat,
            timestamp: run.timestamp.clone(),
        };

        tracing::info!(records = inventory.items.len(), "Processing records");

        let coordinator = ExportCoordinator::new(catalog, options);
        let report = match coordinator.run(inventory.items, run.started).await {
            Ok(report) => report,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(6);
            }
        };

        // Post-run housekeeping, best effort.
        if let Err(e) = workspace::delete_empty_directories(&work_dir) {
            tracing::warn!(error = %e, "Failed to delete empty directories");
        }
        match workspace::move_log_file(&run.log_file, &work_dir) {
            Ok(destination) => {
                tracing::info!(path = %destination.display(), "Moved log file into work directory")
            }
            Err(e) => tracing::warn!(error = %e, "Failed to move log file"),
        }

        // Echo the report.
        println!();
        print!("{}", report.render());
        if let Some(path) = &report.report_path {
            println!();
            println!("Report written to {}", path.display());
        }

        Ok(if report.has_errors() { 1 } else { 0 })
    }
}
