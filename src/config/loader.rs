//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::QuireConfig;
use super::secret::secret_string;
use crate::domain::errors::QuireError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into QuireConfig
/// 4. Applies environment variable overrides (QUIRE_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
pub fn load_config(path: impl AsRef<Path>) -> Result<QuireConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(QuireError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        QuireError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: QuireConfig = toml::from_str(&contents)
        .map_err(|e| QuireError::Configuration(format!("Failed to parse TOML: {e}")))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config
        .validate()
        .map_err(|e| QuireError::Configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(QuireError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using QUIRE_* prefix
///
/// Environment variables follow the pattern: QUIRE_<SECTION>_<KEY>
/// For example: QUIRE_CATALOG_BASE_URL, QUIRE_EXPORT_WORKERS
fn apply_env_overrides(config: &mut QuireConfig) {
    if let Ok(val) = std::env::var("QUIRE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("QUIRE_CATALOG_BASE_URL") {
        config.catalog.base_url = val;
    }
    if let Ok(val) = std::env::var("QUIRE_CATALOG_USERNAME") {
        config.catalog.username = Some(val);
    }
    if let Ok(val) = std::env::var("QUIRE_CATALOG_PASSWORD") {
        config.catalog.password = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("QUIRE_CATALOG_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.catalog.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("QUIRE_CATALOG_TLS_VERIFY") {
        config.catalog.tls_verify = val.parse().unwrap_or(true);
    }

    if let Ok(val) = std::env::var("QUIRE_EXPORT_WORKERS") {
        if let Ok(workers) = val.parse() {
            config.export.workers = workers;
        }
    }
}
