//! Directory listing, ordering and filtering shared by walks.

use std::cmp::Ordering;
use std::fs::{self, FileType};
use std::io;
use std::path::{Path, PathBuf};

use super::config::{HIDDEN_MARKER, TraversalConfig};

/// A directory entry that survived listing.
#[derive(Debug)]
pub struct ListedEntry {
    pub name: String,
    pub path: PathBuf,
    /// Type of the entry itself, symlinks not followed.
    pub file_type: Option<FileType>,
}

/// Case-insensitive ordering with the raw name as tie-break.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_MARKER)
}

/// Read a directory and return its entries sorted for display.
///
/// Entries that fail to read individually are skipped. Failing to open the
/// directory itself is returned to the caller.
pub fn read_sorted_entries(path: &Path) -> io::Result<Vec<ListedEntry>> {
    let mut entries: Vec<ListedEntry> = fs::read_dir(path)?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(ListedEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                path: entry.path(),
                file_type: entry.file_type().ok(),
            }),
            Err(e) => {
                log::trace!("skipping unreadable entry in {}: {}", path.display(), e);
                None
            }
        })
        .collect();
    entries.sort_by(|a, b| compare_names(&a.name, &b.name));
    Ok(entries)
}

/// Drop hidden entries, then excluded ones, keeping order.
pub fn filter_entries(entries: Vec<ListedEntry>, config: &TraversalConfig) -> Vec<ListedEntry> {
    entries
        .into_iter()
        .filter(|entry| config.include_hidden || !is_hidden(&entry.name))
        .filter(|entry| {
            let excluded = config.is_excluded(&entry.name);
            if excluded {
                log::trace!("excluding {}", entry.path.display());
            }
            !excluded
        })
        .collect()
}
