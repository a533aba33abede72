//! Concurrent export pipeline
//!
//! The pipeline partitions the work-item inventory across a fixed pool of
//! workers, runs the per-item fetch-filter-write sequence with one-retry
//! fault tolerance, fans the per-item outcomes back in without loss or
//! duplication, and produces the run report.

pub mod coordinator;
pub mod options;
pub mod outcome;
pub mod partition;
pub mod reformat;
pub mod report;
pub mod worker;

pub use coordinator::ExportCoordinator;
pub use options::{ExportFormat, ExportOptions};
pub use outcome::{ExportOutcome, OutcomeKind};
pub use report::RunReport;
