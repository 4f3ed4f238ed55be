//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use manifest_sync::output::OutputConfig;

use crate::commands;

/// Manifest Sync - Converge working copies onto declared repository manifests
#[derive(Parser, Debug)]
#[command(name = "manifest-sync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Discover manifests and reconcile every declared repository
    Sync(commands::sync::SyncArgs),

    /// Print the merged repository set without touching any working copy
    List(commands::list::ListArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // RUST_LOG still wins over the flag, matching env_logger convention.
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        )
        .init();

        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Sync(args) => commands::sync::execute(args, &output),
            Commands::List(args) => commands::list::execute(args, &output),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
