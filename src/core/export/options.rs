//! Export run configuration

use crate::domain::QuireError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// EAD structured markup, one file per record
    Ead,
    /// MARCXML catalog record, one file per record
    Marc,
}

impl FromStr for ExportFormat {
    type Err = QuireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ead" => Ok(ExportFormat::Ead),
            "marc" => Ok(ExportFormat::Marc),
            other => Err(QuireError::Configuration(format!(
                "Unsupported export format '{other}'. Supported formats: ead, marc"
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Ead => write!(f, "ead"),
            ExportFormat::Marc => write!(f, "marc"),
        }
    }
}

/// Immutable run configuration consumed by every worker.
///
/// Constructed once before the run, shared read-only behind an `Arc`, and
/// never mutated while workers are live.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Output root directory
    pub work_dir: PathBuf,

    /// Target export format
    pub format: ExportFormat,

    /// Include not-yet-published descriptive notes in exports
    pub unpublished_notes: bool,

    /// Include not-yet-published records in the run
    pub unpublished_records: bool,

    /// Number of concurrent workers (>= 1)
    pub workers: usize,

    /// Pretty-reformat EAD output with the external formatter
    pub reformat: bool,

    /// Run timestamp embedded in output filenames
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parses_known_values() {
        assert_eq!("ead".parse::<ExportFormat>().unwrap(), ExportFormat::Ead);
        assert_eq!("marc".parse::<ExportFormat>().unwrap(), ExportFormat::Marc);
        assert_eq!("EAD".parse::<ExportFormat>().unwrap(), ExportFormat::Ead);
    }

    #[test]
    fn test_format_rejects_unknown_values() {
        let err = "pdf".parse::<ExportFormat>().unwrap_err();
        assert!(err.to_string().contains("Unsupported export format"));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ExportFormat::Ead.to_string(), "ead");
        assert_eq!(ExportFormat::Marc.to_string(), "marc");
    }
}
