//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Quire using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

/// Quire - Archival Finding Aid Export Tool
#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(version, about, long_about = None)]
#[command(author = "Quire Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "quire.toml", env = "QUIRE_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "QUIRE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export finding aids from the catalog service to disk
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

/// Identity of one run.
///
/// Fixed at process start; the timestamp is embedded in output, report,
/// and log filenames so a run's artifacts can be matched up afterwards.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Wall-clock start of the run
    pub started: Instant,

    /// Filename-safe local timestamp of the run start
    pub timestamp: String,

    /// Run log file, created next to the process and relocated into the
    /// output root at run end
    pub log_file: PathBuf,
}

impl RunContext {
    /// Capture the identity of a run starting now.
    pub fn new() -> Self {
        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
        let log_file = PathBuf::from(format!("quire-export-{timestamp}.log"));
        Self {
            started: Instant::now(),
            timestamp,
            log_file,
        }
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}
