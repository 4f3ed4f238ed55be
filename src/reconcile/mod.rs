//! # Working-Copy Reconciliation
//!
//! Forces each declared target directory into the declared source-control
//! state, regardless of its prior condition. Only force-convergence
//! operations are used; there is no conflict handling and no rollback.
//!
//! ## Git
//!
//! Four prior states are distinguished:
//!
//! - **No local copy** (target absent): plain clone into the target.
//! - **Matching metadata**: the configured remote's URL equals the
//!   declared URL; metadata is kept as-is.
//! - **Foreign or unreadable metadata**: the `.git` directory is deleted
//!   and fresh metadata is installed without disturbing the rest of the
//!   directory (clone `--no-checkout` into a temp subdirectory, move the
//!   `.git` directory up, drop the temp directory).
//! - **Directory without metadata**: same metadata install as above.
//!
//! Whichever path was taken, the declared branch is then force-checked-out
//! and force-pulled, so repeated runs with an unchanged declaration
//! converge to the same tree.
//!
//! ## Svn
//!
//! Three unconditional steps: force checkout at the declared revision
//! (updates an existing working copy in place), force update accepting the
//! remote side of conflicts, and a full-depth revert of local edits.
//!
//! ## Failure semantics
//!
//! A failed step is logged, recorded on the repository's
//! [`ReconcileReport`], and never stops later steps or later
//! repositories.

mod git;
mod svn;

use std::path::PathBuf;

use log::error;

use crate::error::Error;
use crate::manifest::{RepositoryConfig, VcsSpec};
use crate::runner::CommandRunner;

/// Outcome of reconciling a single repository.
#[derive(Debug)]
pub struct ReconcileReport {
    /// The declaration's target directory.
    pub target_path: PathBuf,
    /// Human-readable description of every failed step, in order.
    pub failures: Vec<String>,
}

impl ReconcileReport {
    fn new(target_path: PathBuf) -> Self {
        Self {
            target_path,
            failures: Vec::new(),
        }
    }

    /// True when every step of the reconciliation succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!("{}: {}", self.target_path.display(), message);
        self.failures.push(message);
    }
}

/// Drives working copies toward their declared state through a
/// [`CommandRunner`].
pub struct Reconciler<'a, R: CommandRunner> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> Reconciler<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    /// Converge one declared repository, collecting step failures.
    pub fn reconcile(&self, config: &RepositoryConfig) -> ReconcileReport {
        let mut report = ReconcileReport::new(config.target_path.clone());
        match &config.vcs {
            VcsSpec::Git { remote, branch } => {
                git::converge(self.runner, config, remote, branch, &mut report)
            }
            VcsSpec::Svn { revision } => {
                svn::converge(self.runner, config, revision, &mut report)
            }
        }
        report
    }
}

/// Run one VCS command, recording (but swallowing) any failure.
///
/// Returns whether the step succeeded. Failures here never propagate: the
/// reconciler always proceeds to the next step.
fn force_step<R: CommandRunner>(
    runner: &R,
    report: &mut ReconcileReport,
    program: &str,
    args: &[&str],
) -> bool {
    let command = format!("{} {}", program, args.join(" "));
    match runner.run(program, args) {
        Ok(output) if output.success => true,
        Ok(output) => {
            let failure = Error::CommandFailed {
                command,
                code: output.code,
                stderr: output.stderr.trim().to_string(),
            };
            report.record(failure.to_string());
            false
        }
        Err(err) => {
            report.record(err.to_string());
            false
        }
    }
}
