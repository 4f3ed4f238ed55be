//! # Manifest Schema and Parsing
//!
//! This module defines the canonical repository declaration
//! ([`RepositoryConfig`]) and the parser that produces it from manifest
//! files. A manifest file is a JSON array of entry objects:
//!
//! ```json
//! [
//!   { "type": "git", "url": "https://host/repo.git", "path": "{rootPath}/libs/repo",
//!     "branch": "stable", "version": 2 },
//!   { "type": "svn", "url": "https://host/svn/trunk", "path": "vendor/trunk" }
//! ]
//! ```
//!
//! ## Normalization rules
//!
//! - `type` must be `"git"` or `"svn"`; anything else drops the entry.
//! - `url` and `path` are required; a missing one drops the entry.
//! - Defaults apply when a field is absent or `null`: `remote` → `origin`,
//!   `branch` → `master`, `revision` → `HEAD`, `version` → `0`.
//! - `version` accepts a JSON integer or a numeric string; anything else
//!   drops the entry.
//! - The literal token `{rootPath}` in `path` is substituted, then the
//!   result is resolved to an absolute path relative to the manifest file.
//!
//! ## Partial-success semantics
//!
//! A bad entry drops only itself (logged via `log::error!`); the remaining
//! entries in the same file still parse. A file that is not a JSON array
//! at all is an error for that file only — callers log it and continue
//! with the other discovered manifests.

use std::path::{Path, PathBuf};

use log::error;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::path;

/// Default git remote name when a manifest entry does not declare one.
pub const DEFAULT_REMOTE: &str = "origin";
/// Default git branch when a manifest entry does not declare one.
pub const DEFAULT_BRANCH: &str = "master";
/// Default svn revision when a manifest entry does not declare one.
pub const DEFAULT_REVISION: &str = "HEAD";

/// Canonical, normalized representation of one declared repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Source location understood by the underlying VCS client.
    pub url: String,
    /// Absolute target directory; the deduplication key.
    pub target_path: PathBuf,
    /// Merge tie-break value; meaningless once reconciliation begins.
    pub version: i64,
    /// Kind-specific convergence parameters.
    pub vcs: VcsSpec,
}

/// Kind-specific fields of a repository declaration.
///
/// Modeling these as enum payloads means git-only fields cannot exist on
/// an svn declaration and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsSpec {
    Git { remote: String, branch: String },
    Svn { revision: String },
}

impl RepositoryConfig {
    /// The manifest `type` string this declaration was parsed from.
    pub fn kind(&self) -> &'static str {
        match self.vcs {
            VcsSpec::Git { .. } => "git",
            VcsSpec::Svn { .. } => "svn",
        }
    }
}

/// Raw manifest entry as written on disk, before normalization.
///
/// Every field is optional here so that absence and `null` can both flow
/// into the defaulting rules; requiredness is enforced in
/// `normalize_entry`, where a violation drops the entry instead of the
/// whole file.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "type")]
    kind: Option<String>,
    url: Option<String>,
    path: Option<String>,
    #[serde(default)]
    version: Option<Value>,
    #[serde(default)]
    remote: Option<String>,
    #[serde(default)]
    branch: Option<String>,
    #[serde(default)]
    revision: Option<String>,
}

/// Parse one manifest file into canonical repository declarations.
///
/// `root_path` is the resolved `{rootPath}` substitution value from the
/// start-config. Entry-level problems are logged and skipped; an empty
/// array yields an empty vec.
pub fn parse_file(file: &Path, root_path: &Path) -> Result<Vec<RepositoryConfig>> {
    let content = std::fs::read_to_string(file)?;
    let elements: Vec<Value> =
        serde_json::from_str(&content).map_err(|e| Error::ManifestParse {
            file: file.display().to_string(),
            message: e.to_string(),
        })?;

    let mut configs = Vec::with_capacity(elements.len());
    for element in elements {
        match normalize_entry(element, file, root_path) {
            Ok(config) => configs.push(config),
            Err(reason) => error!("skipping entry in {}: {}", file.display(), reason),
        }
    }
    Ok(configs)
}

fn normalize_entry(
    element: Value,
    file: &Path,
    root_path: &Path,
) -> std::result::Result<RepositoryConfig, String> {
    let raw: RawEntry =
        serde_json::from_value(element).map_err(|e| format!("malformed entry: {}", e))?;

    let kind = raw.kind.ok_or("missing \"type\"")?;
    if kind != "git" && kind != "svn" {
        return Err(format!("invalid repository type '{}'", kind));
    }

    let url = raw.url.ok_or("missing \"url\"")?;
    let raw_path = raw.path.ok_or("missing \"path\"")?;

    let substituted = path::substitute_root(&raw_path, root_path);
    let target_path = path::resolve(&substituted, file);

    let version = coerce_version(raw.version)?;

    let vcs = if kind == "git" {
        VcsSpec::Git {
            remote: raw.remote.unwrap_or_else(|| DEFAULT_REMOTE.to_string()),
            branch: raw.branch.unwrap_or_else(|| DEFAULT_BRANCH.to_string()),
        }
    } else {
        VcsSpec::Svn {
            revision: raw.revision.unwrap_or_else(|| DEFAULT_REVISION.to_string()),
        }
    };

    Ok(RepositoryConfig {
        url,
        target_path,
        version,
        vcs,
    })
}

/// Coerce the manifest `version` field to an integer.
///
/// Accepts a JSON integer or a numeric string; absent and `null` mean 0.
fn coerce_version(value: Option<Value>) -> std::result::Result<i64, String> {
    match value {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(number)) => number
            .as_i64()
            .ok_or_else(|| format!("invalid version '{}'", number)),
        Some(Value::String(text)) => text
            .parse::<i64>()
            .map_err(|_| format!("invalid version '{}'", text)),
        Some(other) => Err(format!("invalid version '{}'", other)),
    }
}
