//! Per-item export outcomes

/// Terminal classification of one export attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// The record was exported and written to disk
    Success,
    /// The record was exported with a non-fatal finding
    ///
    /// Nothing currently produces this; the kind exists as the hook for
    /// output-validation findings.
    Warning,
    /// A remote fetch (after retry) or local write failed
    Error,
    /// The record was filtered out by the publish filter
    Skipped,
}

/// Result of attempting to export one work item.
///
/// Exactly one outcome is produced per work item, never zero, never more
/// than one. The URI is empty only when the record could not be
/// identified at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    /// Outcome kind
    pub kind: OutcomeKind,

    /// Canonical URI of the record (synthetic if the record never loaded)
    pub uri: String,

    /// Failure or finding message; empty for Success and Skipped
    pub message: String,
}

impl ExportOutcome {
    /// A clean export.
    pub fn success(uri: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Success,
            uri: uri.into(),
            message: String::new(),
        }
    }

    /// An export with a non-fatal finding.
    pub fn warning(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Warning,
            uri: uri.into(),
            message: message.into(),
        }
    }

    /// A failed export.
    pub fn error(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Error,
            uri: uri.into(),
            message: message.into(),
        }
    }

    /// A record filtered out before export.
    pub fn skipped(uri: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Skipped,
            uri: uri.into(),
            message: String::new(),
        }
    }

    /// Message with newlines flattened to spaces, for one-line report
    /// entries.
    pub fn flattened_message(&self) -> String {
        self.message.replace(['\n', '\r'], " ")
    }
}
