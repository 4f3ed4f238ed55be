//! Completions command implementation
//!
//! Generates shell completion scripts via `clap_complete`. Redirect the
//! output to the file your shell expects, e.g.:
//!
//! ```bash
//! manifest-sync completions bash > ~/.local/share/bash-completion/completions/manifest-sync
//! manifest-sync completions zsh > ~/.zfunc/_manifest-sync
//! ```

use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the completions command
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "manifest-sync", &mut io::stdout());
    Ok(())
}
