//! List command implementation
//!
//! Read-only view of the merged repository set: discovers and parses the
//! manifests exactly like `sync`, but never touches a working copy. Useful
//! for checking what a sync would act on and which declaration won each
//! target path.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use manifest_sync::config;
use manifest_sync::output::{emoji, OutputConfig};
use manifest_sync::pipeline;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Path to the start-config file; prompted for interactively when omitted
    #[arg(value_name = "CONFIG", env = "MANIFEST_SYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show only the total count of declared repositories
    #[arg(long)]
    pub count: bool,
}

/// Execute the list command
pub fn execute(args: ListArgs, out: &OutputConfig) -> Result<()> {
    let config_path = super::resolve_config_path(args.config)?;
    let start = config::from_file(&config_path)?;

    let repos = pipeline::discover_repositories(&start);

    if args.count {
        println!("{}", repos.len());
        return Ok(());
    }

    println!(
        "{} {} repositories declared under {}",
        emoji(out, "📋", "[LIST]"),
        repos.len(),
        start.scan_path.display()
    );
    for repo in &repos {
        println!(
            "  {:<4} v{:<3} {} -> {}",
            repo.kind(),
            repo.version,
            repo.url,
            repo.target_path.display()
        );
    }

    Ok(())
}
