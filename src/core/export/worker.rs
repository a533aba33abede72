//! Export worker
//!
//! A worker drives the per-item export sequence over one assigned chunk,
//! strictly in order, and returns its accumulated outcomes as a single
//! unit. Per-item failures are captured as [`ExportOutcome`] data and
//! never escape the worker.

use crate::adapters::catalog::CatalogSource;
use crate::core::export::options::{ExportFormat, ExportOptions};
use crate::core::export::outcome::ExportOutcome;
use crate::core::export::reformat;
use crate::domain::{Record, Result, WorkItem};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

/// How often a worker emits a progress notice, in completed items.
const PROGRESS_INTERVAL: usize = 50;

/// Process one chunk of work items sequentially.
///
/// Returns exactly one outcome per item, in chunk order.
pub(crate) async fn export_chunk(
    catalog: Arc<dyn CatalogSource>,
    options: Arc<ExportOptions>,
    chunk: Vec<WorkItem>,
    worker_id: usize,
) -> Vec<ExportOutcome> {
    tracing::info!(
        worker_id,
        chunk_size = chunk.len(),
        "Worker starting"
    );

    let mut outcomes = Vec::with_capacity(chunk.len());
    for item in &chunk {
        outcomes.push(export_item(catalog.as_ref(), &options, item, worker_id).await);

        let completed = outcomes.len();
        if completed % PROGRESS_INTERVAL == 0 {
            tracing::info!(worker_id, completed, "Worker progress");
        }
    }

    tracing::info!(
        worker_id,
        processed = outcomes.len(),
        "Worker finished"
    );
    outcomes
}

/// Run the fetch-filter-write sequence for one work item.
async fn export_item(
    catalog: &dyn CatalogSource,
    options: &ExportOptions,
    item: &WorkItem,
    worker_id: usize,
) -> ExportOutcome {
    // Fetch the record, retrying once on failure.
    let record = match fetch_with_retry(worker_id, "record", || {
        catalog.fetch_record(item.collection_id, item.record_id)
    })
    .await
    {
        Ok(record) => record,
        Err(e) => return ExportOutcome::error(item.synthetic_uri(), e.to_string()),
    };

    // Publish filter: unpublished records are skipped unless requested.
    if !options.unpublished_records && !record.publish {
        tracing::info!(
            worker_id,
            uri = %record.uri,
            "Record not set to publish, skipping"
        );
        return ExportOutcome::skipped(record.uri);
    }

    match options.format {
        ExportFormat::Ead => export_ead(catalog, options, item, &record, worker_id).await,
        ExportFormat::Marc => export_marc(catalog, options, item, &record, worker_id).await,
    }
}

/// Export one record as EAD structured markup.
async fn export_ead(
    catalog: &dyn CatalogSource,
    options: &ExportOptions,
    item: &WorkItem,
    record: &Record,
    worker_id: usize,
) -> ExportOutcome {
    let bytes = match fetch_with_retry(worker_id, "EAD content", || {
        catalog.fetch_finding_aid(item.collection_id, item.record_id, options.unpublished_notes)
    })
    .await
    {
        Ok(bytes) => bytes,
        Err(e) => return ExportOutcome::error(record.uri.clone(), e.to_string()),
    };

    let filename = format!("{}.xml", item.record_id);
    let path = output_path(options, item, record, &filename);

    if let Err(e) = tokio::fs::write(&path, &bytes).await {
        tracing::error!(
            worker_id,
            uri = %record.uri,
            path = %path.display(),
            error = %e,
            "Could not write EAD file"
        );
        return ExportOutcome::error(record.uri.clone(), e.to_string());
    }

    // Reformat failures are logged and swallowed; the raw file was
    // written successfully.
    if options.reformat {
        if let Err(e) = reformat::tab_reformat(&path).await {
            tracing::warn!(
                worker_id,
                path = %path.display(),
                error = %e,
                "Could not reformat EAD file"
            );
        }
    }

    tracing::debug!(worker_id, uri = %record.uri, path = %path.display(), "Exported record");
    ExportOutcome::success(record.uri.clone())
}

/// Export one record as a MARCXML catalog record.
async fn export_marc(
    catalog: &dyn CatalogSource,
    options: &ExportOptions,
    item: &WorkItem,
    record: &Record,
    worker_id: usize,
) -> ExportOutcome {
    let bytes = match fetch_with_retry(worker_id, "MARCXML content", || {
        catalog.fetch_catalog_record(item.collection_id, item.record_id, options.unpublished_notes)
    })
    .await
    {
        Ok(bytes) => bytes,
        Err(e) => return ExportOutcome::error(record.uri.clone(), e.to_string()),
    };

    let filename = format!(
        "{}_{}.xml",
        record.external_id.to_lowercase(),
        options.timestamp
    );
    let path = output_path(options, item, record, &filename);

    if let Err(e) = tokio::fs::write(&path, &bytes).await {
        tracing::error!(
            worker_id,
            uri = %record.uri,
            path = %path.display(),
            error = %e,
            "Could not write MARCXML file"
        );
        return ExportOutcome::error(record.uri.clone(), e.to_string());
    }

    tracing::debug!(worker_id, uri = %record.uri, path = %path.display(), "Exported record");
    ExportOutcome::success(record.uri.clone())
}

/// Compute the output path for one record.
///
/// Routes into `unpublished/` only when the run allows unpublished records
/// AND this record's own publish flag is false; otherwise `exports/`.
fn output_path(
    options: &ExportOptions,
    item: &WorkItem,
    record: &Record,
    filename: &str,
) -> PathBuf {
    let subdir = if options.unpublished_records && !record.publish {
        "unpublished"
    } else {
        "exports"
    };

    options
        .work_dir
        .join(&item.collection_slug)
        .join(subdir)
        .join(filename)
}

/// Run a remote fetch, retrying exactly once on failure.
///
/// The second failure is the one reported; the first is logged.
async fn fetch_with_retry<T, F, Fut>(worker_id: usize, what: &str, operation: F) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    match operation().await {
        Ok(value) => Ok(value),
        Err(first) => {
            tracing::warn!(
                worker_id,
                what,
                error = %first,
                "Fetch failed, retrying"
            );
            operation().await.map_err(|second| {
                tracing::error!(
                    worker_id,
                    what,
                    error = %second,
                    "Fetch failed on 2nd attempt"
                );
                second
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QuireError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn flaky(calls: &AtomicUsize, fail_first: usize) -> Result<u32> {
        let attempt = calls.fetch_add(1, Ordering::SeqCst);
        if attempt < fail_first {
            Err(QuireError::Export(format!("attempt {attempt} failed")))
        } else {
            Ok(7)
        }
    }

    #[tokio::test]
    async fn test_fetch_with_retry_first_attempt_succeeds() {
        let calls = AtomicUsize::new(0);
        let value = fetch_with_retry(1, "record", || flaky(&calls, 0))
            .await
            .unwrap();
        assert_eq!(value, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_with_retry_recovers_once() {
        let calls = AtomicUsize::new(0);
        let value = fetch_with_retry(1, "record", || flaky(&calls, 1))
            .await
            .unwrap();
        assert_eq!(value, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fetch_with_retry_gives_up_after_second_failure() {
        let calls = AtomicUsize::new(0);
        let err = fetch_with_retry(1, "record", || flaky(&calls, 5))
            .await
            .unwrap_err();
        // Exactly two attempts, and the second failure is the one reported.
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(err.to_string().contains("attempt 1 failed"));
    }

    #[test]
    fn test_output_path_routing() {
        use crate::domain::ids::{CollectionId, RecordId};

        let mut options = ExportOptions {
            work_dir: PathBuf::from("/tmp/out"),
            format: ExportFormat::Ead,
            unpublished_notes: false,
            unpublished_records: false,
            workers: 2,
            reformat: false,
            timestamp: "20260807-120000".to_string(),
        };
        let item = WorkItem::new(CollectionId::new(2), "manuscripts", RecordId::new(5));
        let published = Record {
            uri: "/collections/2/records/5".to_string(),
            title: String::new(),
            external_id: "MSS_042".to_string(),
            publish: true,
        };
        let unpublished = Record {
            publish: false,
            ..published.clone()
        };

        // Default run: everything under exports/, published or not.
        assert_eq!(
            output_path(&options, &item, &published, "5.xml"),
            PathBuf::from("/tmp/out/manuscripts/exports/5.xml")
        );
        assert_eq!(
            output_path(&options, &item, &unpublished, "5.xml"),
            PathBuf::from("/tmp/out/manuscripts/exports/5.xml")
        );

        // Unpublished-inclusive run: only unpublished records are rerouted.
        options.unpublished_records = true;
        assert_eq!(
            output_path(&options, &item, &published, "5.xml"),
            PathBuf::from("/tmp/out/manuscripts/exports/5.xml")
        );
        assert_eq!(
            output_path(&options, &item, &unpublished, "5.xml"),
            PathBuf::from("/tmp/out/manuscripts/unpublished/5.xml")
        );
    }
}
