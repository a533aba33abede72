//! Logging and observability
//!
//! Structured logging via `tracing`: console output for operators plus a
//! per-run JSON log file that ends up inside the export output root.

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
