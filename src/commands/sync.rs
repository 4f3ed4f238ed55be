//! Sync command implementation
//!
//! Runs the full pipeline: load the start-config, discover manifest
//! files, parse and merge declarations, then reconcile each repository
//! sequentially. A repository that fails to converge never stops the
//! run; failures are summarized at the end and reflected in the exit
//! status.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Args;

use manifest_sync::config;
use manifest_sync::output::{emoji, OutputConfig};
use manifest_sync::pipeline;
use manifest_sync::runner::SystemRunner;

/// Arguments for the sync command
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Path to the start-config file; prompted for interactively when omitted
    #[arg(value_name = "CONFIG", env = "MANIFEST_SYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show the merged repository set without reconciling anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Show detailed progress information
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the sync command
pub fn execute(args: SyncArgs, out: &OutputConfig) -> Result<()> {
    let start_time = Instant::now();

    let config_path = super::resolve_config_path(args.config)?;
    let start = config::from_file(&config_path)?;

    if !args.quiet {
        println!("{} Manifest Sync", emoji(out, "🔄", "[SYNC]"));
        println!();
        if args.dry_run {
            println!("{} DRY RUN MODE - No working copy will be touched", emoji(out, "🔎", "[DRY]"));
            println!();
        }
    }
    if !args.quiet && args.verbose {
        println!("Scan path: {}", start.scan_path.display());
        println!("Prefix:    {:?}", start.prefix);
        println!("Root path: {}", start.root_path.display());
        println!();
    }

    let repos = pipeline::discover_repositories(&start);

    if !args.quiet && (args.verbose || args.dry_run) {
        for repo in &repos {
            println!(
                "  {} {} -> {}",
                repo.kind(),
                repo.url,
                repo.target_path.display()
            );
        }
        if !repos.is_empty() {
            println!();
        }
    }

    if args.dry_run {
        if !args.quiet {
            println!("{} {} repositories declared", emoji(out, "📋", "[PLAN]"), repos.len());
        }
        return Ok(());
    }

    let runner = SystemRunner;
    let reports = pipeline::reconcile_all(&runner, &repos);

    let failed: Vec<_> = reports.iter().filter(|report| !report.is_clean()).collect();
    let duration = start_time.elapsed();

    if !args.quiet {
        for report in &failed {
            println!(
                "{} {} ({} failed step(s))",
                emoji(out, "❌", "[FAIL]"),
                report.target_path.display(),
                report.failures.len()
            );
        }
        println!(
            "{} Reconciled {} of {} repositories in {:.2}s",
            emoji(out, "✅", "[DONE]"),
            reports.len() - failed.len(),
            reports.len(),
            duration.as_secs_f64()
        );
    }

    if !failed.is_empty() {
        anyhow::bail!(
            "{} of {} repositories failed to reconcile",
            failed.len(),
            reports.len()
        );
    }
    Ok(())
}
