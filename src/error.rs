//! # Error Handling
//!
//! Centralized error handling for `manifest-sync`, built on `thiserror`.
//! The `Error` enum covers the failure modes the pipeline can hit:
//!
//! - Start-config parsing problems (fatal for the run).
//! - Manifest file parsing problems (fatal for that file only; the caller
//!   logs and continues).
//! - Path resolution problems.
//! - External VCS command failures and missing binaries (recorded per
//!   repository, never fatal for the run).
//! - Wrapped I/O and JSON errors.
//!
//! Variants carry enough context (file, command line, stderr) for a useful
//! console message, and `ConfigParse` can attach a hint telling the user
//! how to fix the start-config.

use thiserror::Error;

/// Main error type for manifest-sync operations
#[derive(Error, Debug)]
pub enum Error {
    /// The start-config file is missing, malformed, or lacks a required key.
    #[error("Start config error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A manifest file could not be parsed as a JSON array.
    ///
    /// This drops the file's entries; other manifest files still contribute.
    #[error("Manifest parse error in {file}: {message}")]
    ManifestParse { file: String, message: String },

    /// An error occurred with a path-related operation.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// An external VCS command ran but exited non-zero.
    #[error("Command failed ({command}, exit {}): {stderr}", code.map(|c| c.to_string()).unwrap_or_else(|| "signal".to_string()))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// An external VCS binary could not be found on PATH.
    #[error("Binary not found: {binary} (is it installed and on PATH?)")]
    BinaryNotFound { binary: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON parsing error, wrapped from `serde_json::Error`.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
