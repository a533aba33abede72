//! Validate config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing, so a successful load is a
        // valid configuration.
        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                println!("Configuration is not valid");
                println!("  Error: {e}");
                return Ok(2);
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration summary:");
        println!("  Log level: {}", config.application.log_level);
        println!("  Catalog: {}", config.catalog.base_url);
        println!(
            "  Username: {}",
            config.catalog.username.as_deref().unwrap_or("(none)")
        );
        println!("  Timeout: {}s", config.catalog.timeout_seconds);
        println!("  TLS verification: {}", config.catalog.tls_verify);
        println!("  Workers: {}", config.export.workers);
        println!();
        Ok(0)
    }
}
