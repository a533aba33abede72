//! External EAD pretty-printing
//!
//! Shells out to `xmllint --format` over one file path and replaces the
//! file with the formatter's output. Callers treat failure as non-fatal.

use crate::domain::{QuireError, Result};
use std::path::Path;
use tokio::process::Command;

/// Reformat an XML file in place with `xmllint --format`.
pub async fn tab_reformat(path: &Path) -> Result<()> {
    let output = Command::new("xmllint")
        .arg("--format")
        .arg(path)
        .output()
        .await
        .map_err(|e| QuireError::Export(format!("could not run xmllint: {e}")))?;

    if !output.status.success() {
        return Err(QuireError::Export(format!(
            "xmllint exited with {} for {}",
            output.status,
            path.display()
        )));
    }

    tokio::fs::write(path, &output.stdout)
        .await
        .map_err(|e| {
            QuireError::Export(format!(
                "could not write reformatted bytes to {}: {e}",
                path.display()
            ))
        })?;

    Ok(())
}
