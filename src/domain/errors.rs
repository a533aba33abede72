//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types: the
//! catalog adapter maps HTTP failures into [`CatalogError`] before they
//! reach the pipeline.

use thiserror::Error;

/// Main Quire error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum QuireError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Catalog service errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Workspace/output-directory errors
    #[error("Workspace error: {0}")]
    Workspace(String),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// Report build/write errors
    #[error("Report error: {0}")]
    Report(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Catalog-service-specific errors
///
/// Errors that occur when talking to the remote catalog service. These
/// never carry the HTTP client's own error types.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to connect to the catalog service
    #[error("Failed to connect to catalog service: {0}")]
    ConnectionFailed(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Invalid response from the service
    #[error("Invalid response from catalog service: {0}")]
    InvalidResponse(String),

    /// Collection not found
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// Record not found
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for QuireError {
    fn from(err: std::io::Error) -> Self {
        QuireError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for QuireError {
    fn from(err: serde_json::Error) -> Self {
        QuireError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for QuireError {
    fn from(err: toml::de::Error) -> Self {
        QuireError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quire_error_display() {
        let err = QuireError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_catalog_error_conversion() {
        let catalog_err = CatalogError::ConnectionFailed("Network error".to_string());
        let quire_err: QuireError = catalog_err.into();
        assert!(matches!(quire_err, QuireError::Catalog(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let quire_err: QuireError = io_err.into();
        assert!(matches!(quire_err, QuireError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let quire_err: QuireError = toml_err.into();
        assert!(matches!(quire_err, QuireError::Configuration(_)));
        assert!(quire_err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = QuireError::Export("Test error".to_string());
        let _: &dyn std::error::Error = &err;

        let err = CatalogError::Timeout("20s".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
