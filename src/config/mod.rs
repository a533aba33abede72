//! Configuration management for Quire.
//!
//! TOML-based configuration loading, parsing, and validation with support
//! for environment variable substitution (`${VAR_NAME}`) and `QUIRE_*`
//! environment overrides.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [catalog]
//! base_url = "https://catalog.example.edu/api"
//! username = "exporter"
//! password = "${QUIRE_CATALOG_PASSWORD}"
//! timeout_seconds = 20
//!
//! [export]
//! workers = 8
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, CatalogConfig, ExportDefaults, QuireConfig};
pub use secret::{secret_string, SecretString, SecretValue};
