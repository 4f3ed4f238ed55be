//! Svn convergence branch of the reconciler.
//!
//! Unlike git there is no prior-state inspection: `svn checkout --force`
//! against an existing working copy updates it in place, so the same
//! three steps converge every prior state (absent, dirty, partially
//! checked out, already correct).

use log::info;

use super::{force_step, ReconcileReport};
use crate::manifest::RepositoryConfig;
use crate::runner::CommandRunner;

pub(super) fn converge<R: CommandRunner>(
    runner: &R,
    config: &RepositoryConfig,
    revision: &str,
    report: &mut ReconcileReport,
) {
    let target = config.target_path.to_string_lossy().to_string();
    info!(
        "converging svn working copy {} to {} @ {}",
        config.target_path.display(),
        config.url,
        revision
    );

    force_step(
        runner,
        report,
        "svn",
        &["checkout", "--force", &config.url, "--revision", revision, &target],
    );
    force_step(
        runner,
        report,
        "svn",
        &["update", "--force", "--accept=theirs-full", &target],
    );
    force_step(
        runner,
        report,
        "svn",
        &["revert", "--depth", "infinity", &target],
    );
}
