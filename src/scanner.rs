//! Manifest file discovery
//!
//! Recursively walks the scan root and collects every regular file whose
//! name starts with the configured prefix and ends with `.json`. The
//! result is sorted by path: directory-walk order differs across
//! platforms, and merge tie-breaking must not depend on it.

use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

/// Suffix every manifest file name must carry.
pub const MANIFEST_SUFFIX: &str = ".json";

/// Find all `<prefix>*.json` files under `root`, sorted by path.
///
/// Unreadable directory entries are skipped. A missing or non-directory
/// root yields an empty result with a logged warning rather than an error:
/// a scan root with nothing to declare is a valid (if suspicious) state.
pub fn scan(root: &Path, prefix: &str) -> Vec<PathBuf> {
    if !root.is_dir() {
        warn!(
            "manifest scan root {} is not a directory; nothing to discover",
            root.display()
        );
        return Vec::new();
    }

    let mut manifests: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            name.starts_with(prefix) && name.ends_with(MANIFEST_SUFFIX)
        })
        .map(|entry| entry.into_path())
        .collect();

    manifests.sort();
    manifests
}
