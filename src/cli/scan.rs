//! Filesystem scanning for the CLI
//!
//! Turns command-line paths into file descriptors. Directories are walked in
//! file-name order so repeated runs see the same batch order.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{IntakeError, Result};
use crate::intake::FileDescriptor;

/// A descriptor together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub descriptor: FileDescriptor,
}

/// Collect files from `paths`.
///
/// Files given directly are always included. Inside directories, hidden
/// entries (names starting with `.`) are skipped and symlinks are followed;
/// broken links and link cycles are logged and skipped.
pub fn scan_paths(paths: &[PathBuf], recursive: bool) -> Result<Vec<ScannedFile>> {
    let mut scanned = Vec::new();

    for path in paths {
        let metadata = fs::metadata(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => IntakeError::FileNotFound {
                path: path.clone(),
                source: Some(e),
            },
            _ => IntakeError::Io(e),
        })?;

        if metadata.is_dir() {
            scan_dir(path, recursive, &mut scanned)?;
        } else {
            scanned.push(scanned_file(path, metadata.len()));
        }
    }

    tracing::debug!(count = scanned.len(), "Scanned input paths");
    Ok(scanned)
}

fn scan_dir(dir: &Path, recursive: bool, scanned: &mut Vec<ScannedFile>) -> Result<()> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if is_dangling(&e) => {
                tracing::warn!(error = %e, "Skipping unreadable link");
                continue;
            }
            Err(e) => {
                return Err(IntakeError::ScanFailed {
                    path: dir.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let size = entry
            .metadata()
            .map_err(|e| IntakeError::ScanFailed {
                path: entry.path().to_path_buf(),
                reason: e.to_string(),
            })?
            .len();
        scanned.push(scanned_file(entry.path(), size));
    }

    Ok(())
}

/// Link cycles and links whose target is gone.
fn is_dangling(error: &walkdir::Error) -> bool {
    error.loop_ancestor().is_some()
        || error.io_error().map(|e| e.kind()) == Some(ErrorKind::NotFound)
}

/// The walk root itself is never treated as hidden.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

fn scanned_file(path: &Path, size_bytes: u64) -> ScannedFile {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    ScannedFile {
        path: path.to_path_buf(),
        descriptor: FileDescriptor::new(filename, size_bytes),
    }
}
