//! Output directory layout and post-run housekeeping
//!
//! The output root holds one subdirectory per collection slug with
//! `exports/` and, when unpublished records are in scope, `unpublished/`
//! underneath. Directory creation is idempotent; pre-existing directories
//! are not an error. A failure to set up this structure is run-fatal.

use crate::domain::{Collection, QuireError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Create a fresh work directory for a run.
///
/// Used for the auto-generated default location; refuses to reuse an
/// existing directory so two runs never interleave output.
pub fn create_work_dir(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(QuireError::Workspace(format!(
            "work directory {} already exists",
            path.display()
        )));
    }

    fs::create_dir(path).map_err(|e| {
        QuireError::Workspace(format!(
            "could not create work directory {}: {e}",
            path.display()
        ))
    })
}

/// Check that a path exists and is a directory.
pub fn check_path(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| {
        QuireError::Workspace(format!("cannot access {}: {e}", path.display()))
    })?;

    if !metadata.is_dir() {
        return Err(QuireError::Workspace(format!(
            "path {} is not a directory",
            path.display()
        )));
    }
    Ok(())
}

/// Create the per-collection export directories under the work directory.
///
/// `<workdir>/<slug>/exports` always; `<workdir>/<slug>/unpublished` only
/// when the run includes unpublished records.
pub fn create_export_dirs(
    work_dir: &Path,
    collections: &[Collection],
    unpublished_records: bool,
) -> Result<()> {
    for collection in collections {
        let collection_dir = work_dir.join(&collection.slug);

        let export_dir = collection_dir.join("exports");
        fs::create_dir_all(&export_dir).map_err(|e| {
            QuireError::Workspace(format!(
                "could not create export directory {}: {e}",
                export_dir.display()
            ))
        })?;
        tracing::debug!(path = %export_dir.display(), "Export directory ready");

        if unpublished_records {
            let unpublished_dir = collection_dir.join("unpublished");
            fs::create_dir_all(&unpublished_dir).map_err(|e| {
                QuireError::Workspace(format!(
                    "could not create unpublished directory {}: {e}",
                    unpublished_dir.display()
                ))
            })?;
            tracing::debug!(path = %unpublished_dir.display(), "Unpublished directory ready");
        }
    }

    Ok(())
}

/// Remove directories under the work directory that ended the run empty.
///
/// Single pass: only directories empty at scan time are removed.
pub fn delete_empty_directories(work_dir: &Path) -> Result<()> {
    let mut empty_dirs = Vec::new();
    collect_empty_dirs(work_dir, &mut empty_dirs)?;

    for dir in empty_dirs {
        match fs::remove_dir(&dir) {
            Ok(()) => tracing::info!(path = %dir.display(), "Removed empty directory"),
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "Failed to remove empty directory")
            }
        }
    }
    Ok(())
}

fn collect_empty_dirs(dir: &Path, empty: &mut Vec<PathBuf>) -> Result<()> {
    let mut children = 0;
    for entry in fs::read_dir(dir)
        .map_err(|e| QuireError::Workspace(format!("cannot read {}: {e}", dir.display())))?
    {
        let entry =
            entry.map_err(|e| QuireError::Workspace(format!("cannot read {}: {e}", dir.display())))?;
        children += 1;
        let path = entry.path();
        if path.is_dir() {
            collect_empty_dirs(&path, empty)?;
        }
    }

    if children == 0 {
        empty.push(dir.to_path_buf());
    }
    Ok(())
}

/// Relocate the run log file into the work directory.
pub fn move_log_file(log_file: &Path, work_dir: &Path) -> Result<PathBuf> {
    let file_name = log_file.file_name().ok_or_else(|| {
        QuireError::Workspace(format!("invalid log file path {}", log_file.display()))
    })?;
    let destination = work_dir.join(file_name);

    fs::rename(log_file, &destination).map_err(|e| {
        QuireError::Workspace(format!(
            "could not move log file to {}: {e}",
            destination.display()
        ))
    })?;

    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::CollectionId;
    use tempfile::TempDir;

    fn collection(slug: &str) -> Collection {
        Collection {
            id: CollectionId::new(1),
            slug: slug.to_string(),
            name: String::new(),
        }
    }

    #[test]
    fn test_create_work_dir_refuses_existing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("run");

        create_work_dir(&path).unwrap();
        assert!(path.is_dir());

        let err = create_work_dir(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_check_path() {
        let tmp = TempDir::new().unwrap();
        assert!(check_path(tmp.path()).is_ok());
        assert!(check_path(&tmp.path().join("missing")).is_err());

        let file = tmp.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        assert!(check_path(&file).is_err());
    }

    #[test]
    fn test_create_export_dirs() {
        let tmp = TempDir::new().unwrap();
        let collections = vec![collection("manuscripts"), collection("photographs")];

        create_export_dirs(tmp.path(), &collections, false).unwrap();
        assert!(tmp.path().join("manuscripts/exports").is_dir());
        assert!(tmp.path().join("photographs/exports").is_dir());
        assert!(!tmp.path().join("manuscripts/unpublished").exists());

        // Idempotent, and adds unpublished/ when requested.
        create_export_dirs(tmp.path(), &collections, true).unwrap();
        assert!(tmp.path().join("manuscripts/unpublished").is_dir());
    }

    #[test]
    fn test_delete_empty_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("manuscripts/exports")).unwrap();
        fs::create_dir_all(tmp.path().join("photographs/exports")).unwrap();
        fs::write(tmp.path().join("manuscripts/exports/1.xml"), "<ead/>").unwrap();

        delete_empty_directories(tmp.path()).unwrap();

        assert!(tmp.path().join("manuscripts/exports/1.xml").exists());
        assert!(!tmp.path().join("photographs/exports").exists());
        // Parent had a child at scan time, so it survives the single pass.
        assert!(tmp.path().join("photographs").exists());
    }

    #[test]
    fn test_move_log_file() {
        let tmp = TempDir::new().unwrap();
        let log = tmp.path().join("quire-export-x.log");
        fs::write(&log, "log line").unwrap();
        let work_dir = tmp.path().join("out");
        fs::create_dir(&work_dir).unwrap();

        let moved = move_log_file(&log, &work_dir).unwrap();
        assert_eq!(moved, work_dir.join("quire-export-x.log"));
        assert!(!log.exists());
        assert_eq!(fs::read_to_string(moved).unwrap(), "log line");
    }
}
