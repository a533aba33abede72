// Quire - Archival Finding Aid Export Tool
// Copyright (c) 2025 Quire Contributors
// Licensed under the MIT License

use clap::Parser;
use quire::cli::{Cli, Commands, RunContext};
use quire::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Capture the run identity before anything else happens; the
    // timestamp names the log, report, and output files.
    let run = RunContext::new();

    // Only export runs get a log file; the other commands are
    // console-only.
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let log_file = match cli.command {
        Commands::Export(_) => Some(run.log_file.clone()),
        _ => None,
    };
    let _guard = match init_logging(log_level, log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(2);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Quire - Archival Finding Aid Export Tool"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli, &run).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            6 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, run: &RunContext) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => args.execute(&cli.config, run).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
