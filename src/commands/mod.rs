//! # CLI Command Implementations
//!
//! One module per subcommand. Each module contains an `Args` struct
//! (clap derive) and an `execute` function that orchestrates the
//! necessary calls into the `manifest_sync` library.

pub mod completions;
pub mod list;
pub mod sync;

use std::path::PathBuf;

use anyhow::Result;

/// Resolve the start-config argument, prompting interactively when the
/// positional argument was omitted.
pub(crate) fn resolve_config_path(config: Option<PathBuf>) -> Result<PathBuf> {
    match config {
        Some(path) => Ok(path),
        None => {
            let typed: String = dialoguer::Input::new()
                .with_prompt("Start config path")
                .interact_text()?;
            Ok(PathBuf::from(typed))
        }
    }
}
