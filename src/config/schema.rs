//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML
//! file. Run-time flags (format, scope, worker count, output location)
//! come from the CLI; the file holds the catalog connection and run
//! defaults.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

/// Main Quire configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuireConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Catalog service configuration
    pub catalog: CatalogConfig,

    /// Export defaults
    #[serde(default)]
    pub export: ExportDefaults,
}

impl QuireConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.catalog.validate()?;
        self.export.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Catalog service configuration
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog service API
    pub base_url: String,

    /// Username for authentication (optional)
    #[serde(default)]
    pub username: Option<String>,

    /// Password for authentication (optional)
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub password: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TLS certificate verification enabled
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,
}

impl CatalogConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("catalog.base_url is mandatory".to_string());
        }
        Url::parse(&self.base_url)
            .map_err(|e| format!("catalog.base_url is not a valid URL: {e}"))?;
        if self.timeout_seconds == 0 {
            return Err("catalog.timeout_seconds must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Export defaults, overridable from the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDefaults {
    /// Number of concurrent export workers
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for ExportDefaults {
    fn default() -> Self {
        Self {
            workers: default_workers(),
        }
    }
}

impl ExportDefaults {
    fn validate(&self) -> Result<(), String> {
        if self.workers == 0 {
            return Err("export.workers must be at least 1".to_string());
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_seconds() -> u64 {
    20
}

fn default_tls_verify() -> bool {
    true
}

fn default_workers() -> usize {
    8
}
