//! Path resolution utilities for manifest-sync
//!
//! Manifest entries and the start-config may use relative paths; they are
//! always interpreted relative to the file that declared them, never the
//! process working directory. Target paths may also carry a `{rootPath}`
//! placeholder that is substituted before resolution.

use std::path::{Component, Path, PathBuf};

/// Placeholder token substituted into manifest target paths.
pub const ROOT_PATH_TOKEN: &str = "{rootPath}";

/// Resolve a possibly-relative path against the file that declared it.
///
/// Absolute input is returned unchanged (normalized). Relative input is
/// joined to `basis_file`'s parent directory; if the result is still
/// relative (the basis itself was relative), it is anchored at the current
/// working directory. There are no error conditions: a malformed path
/// simply produces a path whose filesystem calls will fail downstream.
pub fn resolve(path: &str, basis_file: &Path) -> PathBuf {
    let candidate = Path::new(path);
    if candidate.is_absolute() {
        return normalize(candidate);
    }

    let basis_dir = basis_file.parent().unwrap_or_else(|| Path::new(""));
    let joined = basis_dir.join(candidate);
    let joined = if joined.is_absolute() {
        joined
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(joined)
    };
    normalize(&joined)
}

/// Replace every occurrence of [`ROOT_PATH_TOKEN`] with the resolved root.
pub fn substitute_root(path: &str, root: &Path) -> String {
    path.replace(ROOT_PATH_TOKEN, &root.to_string_lossy())
}

/// Lexically normalize a path, folding `.` and `..` components.
///
/// Purely textual: no symlink resolution and no filesystem access. `..` at
/// the filesystem root stays at the root; `..` that underflows a relative
/// path is kept as-is.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}
