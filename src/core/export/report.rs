//! Run report building and rendering
//!
//! Partitions the merged outcome list by kind (preserving each group's
//! relative order from the merge), computes elapsed wall-clock time, and
//! renders the fixed-structure text document that is written under the
//! output root.

use crate::core::export::outcome::{ExportOutcome, OutcomeKind};
use crate::domain::{QuireError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Derived, read-only view of a completed run.
#[derive(Debug)]
pub struct RunReport {
    /// Successful exports, in merge order
    pub successes: Vec<ExportOutcome>,

    /// Exports with warnings, in merge order
    pub warnings: Vec<ExportOutcome>,

    /// Failed exports, in merge order
    pub errors: Vec<ExportOutcome>,

    /// Records filtered out by the publish filter, in merge order
    pub skipped: Vec<ExportOutcome>,

    /// Elapsed wall-clock time since run start
    pub elapsed: Duration,

    /// Where the rendered report was written
    pub report_path: Option<PathBuf>,
}

impl RunReport {
    /// Build a report from the merged outcome list.
    pub fn build(outcomes: Vec<ExportOutcome>, elapsed: Duration) -> Self {
        let mut report = Self {
            successes: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
            skipped: Vec::new(),
            elapsed,
            report_path: None,
        };

        for outcome in outcomes {
            match outcome.kind {
                OutcomeKind::Success => report.successes.push(outcome),
                OutcomeKind::Warning => report.warnings.push(outcome),
                OutcomeKind::Error => report.errors.push(outcome),
                OutcomeKind::Skipped => report.skipped.push(outcome),
            }
        }

        report
    }

    /// Total number of processed work items.
    pub fn total(&self) -> usize {
        self.successes.len() + self.warnings.len() + self.errors.len() + self.skipped.len()
    }

    /// Whether any item failed.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Render the fixed-structure report document.
    pub fn render(&self) -> String {
        let mut doc = String::new();
        doc.push_str("QUIRE EXPORT REPORT\n");
        doc.push_str("===================\n");
        doc.push_str(&format!("Execution time: {:.2?}\n", self.elapsed));
        doc.push_str(&format!("{} records processed:\n", self.total()));
        doc.push_str(&format!("  {} successful exports\n", self.successes.len()));
        doc.push_str(&format!("  {} skipped records\n", self.skipped.len()));

        doc.push_str(&format!("  {} exports with warnings\n", self.warnings.len()));
        for warning in &self.warnings {
            doc.push_str(&format!(
                "    {} {}\n",
                warning.uri,
                warning.flattened_message()
            ));
        }

        doc.push_str(&format!("  {} errors encountered\n", self.errors.len()));
        for error in &self.errors {
            doc.push_str(&format!("    {} {}\n", error.uri, error.flattened_message()));
        }

        doc
    }

    /// Write the rendered report to the output root.
    ///
    /// The filename embeds the run timestamp. Returns the path, which is
    /// also retained on the report for later display.
    pub fn write(&mut self, work_dir: &Path, timestamp: &str) -> Result<PathBuf> {
        let path = work_dir.join(format!("quire-export-report-{timestamp}.txt"));

        std::fs::write(&path, self.render()).map_err(|e| {
            QuireError::Report(format!("could not write report to {}: {e}", path.display()))
        })?;

        self.report_path = Some(path.clone());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_outcomes() -> Vec<ExportOutcome> {
        vec![
            ExportOutcome::success("/collections/2/records/1"),
            ExportOutcome::error("/collections/2/records/2", "fetch failed\nafter retry"),
            ExportOutcome::skipped("/collections/2/records/3"),
            ExportOutcome::success("/collections/2/records/4"),
            ExportOutcome::warning("/collections/2/records/5", "odd markup"),
            ExportOutcome::error("/collections/2/records/6", "disk full"),
        ]
    }

    #[test]
    fn test_build_partitions_by_kind_preserving_order() {
        let report = RunReport::build(sample_outcomes(), Duration::from_secs(3));

        assert_eq!(report.successes.len(), 2);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.total(), 6);

        assert_eq!(report.errors[0].uri, "/collections/2/records/2");
        assert_eq!(report.errors[1].uri, "/collections/2/records/6");
    }

    #[test]
    fn test_counts_sum_to_total() {
        let report = RunReport::build(sample_outcomes(), Duration::from_secs(1));
        assert_eq!(
            report.successes.len()
                + report.warnings.len()
                + report.errors.len()
                + report.skipped.len(),
            report.total()
        );
    }

    #[test]
    fn test_render_structure() {
        let report = RunReport::build(sample_outcomes(), Duration::from_secs(2));
        let doc = report.render();

        assert!(doc.starts_with("QUIRE EXPORT REPORT\n===================\n"));
        assert!(doc.contains("6 records processed:"));
        assert!(doc.contains("  2 successful exports"));
        assert!(doc.contains("  1 skipped records"));
        assert!(doc.contains("  1 exports with warnings"));
        assert!(doc.contains("    /collections/2/records/5 odd markup"));
        assert!(doc.contains("  2 errors encountered"));
        // Newlines in messages are flattened to spaces.
        assert!(doc.contains("    /collections/2/records/2 fetch failed after retry"));
    }

    #[test]
    fn test_render_empty_run() {
        let report = RunReport::build(Vec::new(), Duration::from_millis(5));
        let doc = report.render();

        assert!(doc.contains("0 records processed:"));
        assert!(doc.contains("  0 successful exports"));
        assert!(doc.contains("  0 skipped records"));
        assert!(doc.contains("  0 exports with warnings"));
        assert!(doc.contains("  0 errors encountered"));
    }

    #[test]
    fn test_write_creates_timestamped_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut report = RunReport::build(sample_outcomes(), Duration::from_secs(1));

        let path = report.write(dir.path(), "20260807-120000").unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "quire-export-report-20260807-120000.txt"
        );
        assert_eq!(report.report_path.as_deref(), Some(path.as_path()));

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, report.render());
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let mut report = RunReport::build(Vec::new(), Duration::from_secs(1));
        let result = report.write(Path::new("/nonexistent/quire-dir"), "ts");
        assert!(matches!(result, Err(QuireError::Report(_))));
    }
}
