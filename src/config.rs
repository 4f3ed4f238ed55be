//! # Start-Config Loading
//!
//! The start-config is the single top-level file naming where to scan for
//! manifests and what `{rootPath}` substitutes to:
//!
//! ```json
//! { "path": "repos", "prefix": "repos-", "rootPath": "../checkout" }
//! ```
//!
//! `path` is required; its absence aborts the run. `prefix` defaults to
//! the empty string (every `*.json` file matches). `rootPath` defaults to
//! the start-config file's own directory. Relative values resolve against
//! that directory, never the process working directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::path;

/// Start-config as written on disk.
#[derive(Debug, Deserialize)]
struct RawStartConfig {
    path: Option<String>,
    #[serde(default)]
    prefix: Option<String>,
    #[serde(rename = "rootPath", default)]
    root_path: Option<String>,
}

/// Resolved manifest-discovery configuration, read once per invocation.
#[derive(Debug, Clone)]
pub struct StartConfig {
    /// Absolute directory to scan for manifest files.
    pub scan_path: PathBuf,
    /// Manifest file name prefix filter.
    pub prefix: String,
    /// Absolute value substituted for `{rootPath}` in manifest paths.
    pub root_path: PathBuf,
}

/// Load and resolve the start-config.
pub fn from_file(file: &Path) -> Result<StartConfig> {
    if !file.is_file() {
        return Err(Error::ConfigParse {
            message: format!("start config not found: {}", file.display()),
            hint: Some("pass the path to a JSON start-config file".to_string()),
        });
    }
    if file.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(Error::ConfigParse {
            message: format!("start config must be a .json file: {}", file.display()),
            hint: None,
        });
    }

    let content = std::fs::read_to_string(file)?;
    let raw: RawStartConfig = serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
        message: format!("{}: {}", file.display(), e),
        hint: None,
    })?;

    let scan = raw.path.ok_or_else(|| Error::ConfigParse {
        message: format!("missing \"path\" in {}", file.display()),
        hint: Some("add \"path\": \"<directory to scan for manifests>\"".to_string()),
    })?;

    Ok(StartConfig {
        scan_path: path::resolve(&scan, file),
        prefix: raw.prefix.unwrap_or_default(),
        root_path: path::resolve(raw.root_path.as_deref().unwrap_or(""), file),
    })
}
