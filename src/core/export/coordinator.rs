//! Export coordinator
//!
//! Partitions the work-item list, launches one worker task per non-empty
//! chunk, joins on all of them, merges their outcome lists in arrival
//! order, and hands the merged list to the report builder. Individual item
//! failures never abort the run; a failure to build or write the report
//! does.

use crate::adapters::catalog::CatalogSource;
use crate::core::export::options::ExportOptions;
use crate::core::export::outcome::ExportOutcome;
use crate::core::export::report::RunReport;
use crate::core::export::{partition, worker};
use crate::domain::{QuireError, Result, WorkItem};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

/// Export coordinator
pub struct ExportCoordinator {
    catalog: Arc<dyn CatalogSource>,
    options: Arc<ExportOptions>,
}

impl ExportCoordinator {
    /// Create a new export coordinator.
    ///
    /// The catalog handle is shared read-only across workers; options are
    /// immutable for the duration of the run.
    pub fn new(catalog: Arc<dyn CatalogSource>, options: ExportOptions) -> Self {
        Self {
            catalog,
            options: Arc::new(options),
        }
    }

    /// Execute the export over the full work-item list.
    ///
    /// Blocks until every launched worker has delivered its outcomes. The
    /// zero-item case completes immediately. Returns the built and
    /// persisted [`RunReport`].
    pub async fn run(&self, items: Vec<WorkItem>, started: Instant) -> Result<RunReport> {
        let total = items.len();
        let chunks = partition::chunk_work_items(items, self.options.workers);

        tracing::info!(
            records = total,
            workers = chunks.len(),
            format = %self.options.format,
            "Starting export"
        );

        let mut workers: JoinSet<Vec<ExportOutcome>> = JoinSet::new();
        for (index, chunk) in chunks.into_iter().enumerate() {
            let catalog = Arc::clone(&self.catalog);
            let options = Arc::clone(&self.options);
            workers.spawn(worker::export_chunk(catalog, options, chunk, index + 1));
        }

        // Fan-in: merge each worker's delivery as it arrives. Arrival
        // order is non-deterministic; per-kind counts are not.
        let mut outcomes: Vec<ExportOutcome> = Vec::with_capacity(total);
        while let Some(delivery) = workers.join_next().await {
            match delivery {
                Ok(chunk_outcomes) => outcomes.extend(chunk_outcomes),
                Err(e) => {
                    return Err(QuireError::Export(format!("worker task failed: {e}")));
                }
            }
        }

        tracing::info!(processed = outcomes.len(), "All workers finished");

        let mut report = RunReport::build(outcomes, started.elapsed());
        report.write(&self.options.work_dir, &self.options.timestamp)?;

        Ok(report)
    }
}
