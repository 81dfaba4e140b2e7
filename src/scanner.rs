use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Raw name as returned by the filesystem
    pub file_name: OsString,
    /// Name for display and extension checks, lossy when not valid UTF-8
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn new(file_name: impl Into<OsString>, path: PathBuf, is_dir: bool) -> Self {
        let file_name = file_name.into();
        let name = file_name.to_string_lossy().into_owned();
        Self {
            file_name,
            name,
            path,
            is_dir,
        }
    }
}

/// List every entry of `target` once, sorted by name.
///
/// Files and subdirectories are both returned; subdirectories are not
/// descended into.
pub fn scan_directory(target: &Path) -> Result<Vec<DirectoryEntry>, ScannerError> {
    debug!(path = ?target, "Scanning directory");

    if !target.exists() {
        return Err(ScannerError::PathNotFound(target.to_path_buf()));
    }

    if !target.is_dir() {
        return Err(ScannerError::NotADirectory(target.to_path_buf()));
    }

    let mut entries = Vec::new();

    let read_dir = fs::read_dir(target).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(target.to_path_buf())
        } else {
            ScannerError::IoError(e)
        }
    })?;

    for entry in read_dir {
        let entry = entry?;
        let path = entry.path();

        trace!(entry = ?path, "Examining entry");

        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        entries.push(DirectoryEntry::new(entry.file_name(), path, is_dir));
    }

    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    debug!(count = entries.len(), "Scan complete");

    Ok(entries)
}
