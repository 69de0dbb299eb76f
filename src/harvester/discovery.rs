use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::warn;
use walkdir::WalkDir;

/// Maximum number of files collected from one root (prevents runaway scans of `/`)
pub const MAX_DISCOVERED_FILES: usize = 100_000;

/// Recursively list every regular file under `root`
///
/// Entries are sorted by file name within each directory, so the result is the same on every
/// run and across platforms. Symlinks are not followed. Entries that cannot be read (permission
/// denied, vanished mid-walk) are logged as warnings and skipped.
///
/// # Errors
///
/// Returns an error if:
/// - `root` does not exist or is not a directory
/// - More than [`MAX_DISCOVERED_FILES`] files are found
pub fn discover_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("Not a directory: {}", root.display());
    }

    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if files.len() >= MAX_DISCOVERED_FILES {
            bail!(
                "Resource limit exceeded: more than {} files under {}",
                MAX_DISCOVERED_FILES,
                root.display()
            );
        }

        let path = entry.into_path();
        if seen.insert(path.clone()) {
            files.push(path);
        }
    }

    Ok(files)
}
