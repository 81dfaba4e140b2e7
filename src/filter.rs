use crate::scanner::DirectoryEntry;
use tracing::{debug, trace};

/// Extensions kept by the JPEG filter. Matching is case-sensitive.
pub const JPEG_EXTENSIONS: [&str; 3] = [".jpeg", ".jpg", ".JPG"];

/// Extension of a file name, including the leading dot.
///
/// This is everything from the last `.` on, so `.jpg` on its own counts as a
/// JPEG name and `archive.tar.gz` yields `.gz`.
pub fn extension_of(name: &str) -> &str {
    name.rfind('.').map(|i| &name[i..]).unwrap_or("")
}

/// Keep only entries whose extension is in `allowed`, preserving order
pub fn filter_by_extension(entries: Vec<DirectoryEntry>, allowed: &[&str]) -> Vec<DirectoryEntry> {
    let before = entries.len();

    let kept: Vec<DirectoryEntry> = entries
        .into_iter()
        .filter(|entry| {
            let extension = extension_of(&entry.name);
            let keep = allowed.iter().any(|ext| *ext == extension);
            if !keep {
                trace!(name = %entry.name, "Dropped by extension filter");
            }
            keep
        })
        .collect();

    debug!(before, after = kept.len(), "Extension filter applied");

    kept
}
