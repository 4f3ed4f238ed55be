//! Git convergence branch of the reconciler.

use std::fs;
use std::path::Path;

use log::{info, warn};

use super::{force_step, ReconcileReport};
use crate::manifest::RepositoryConfig;
use crate::runner::CommandRunner;

/// Temporary clone directory used while reinstalling metadata.
const TEMP_CLONE_DIR: &str = "manifest-sync-tmp";

pub(super) fn converge<R: CommandRunner>(
    runner: &R,
    config: &RepositoryConfig,
    remote: &str,
    branch: &str,
    report: &mut ReconcileReport,
) {
    let target = config.target_path.as_path();
    let target_str = target.to_string_lossy().to_string();

    if !target.exists() {
        info!("cloning {} into {}", config.url, target.display());
        force_step(runner, report, "git", &["clone", &config.url, &target_str]);
    } else {
        let git_dir = target.join(".git");
        let needs_reinstall = if git_dir.exists() {
            match tracked_remote_url(runner, &target_str, remote) {
                Some(current) if current == config.url => false,
                _ => {
                    info!(
                        "metadata in {} does not track {}; reinstalling",
                        target.display(),
                        config.url
                    );
                    if let Err(err) = fs::remove_dir_all(&git_dir) {
                        report.record(format!(
                            "failed to remove {}: {}",
                            git_dir.display(),
                            err
                        ));
                    }
                    true
                }
            }
        } else {
            true
        };

        if needs_reinstall {
            install_metadata(runner, config, report);
        }
    }

    // Both steps run regardless of how the metadata got there: checkout
    // discards local modifications, pull discards divergent local commits.
    force_step(
        runner,
        report,
        "git",
        &["-C", &target_str, "checkout", branch, "--force"],
    );
    force_step(
        runner,
        report,
        "git",
        &["-C", &target_str, "pull", remote, branch, "--force"],
    );
}

/// Read the URL the configured remote currently tracks.
///
/// `None` means the metadata is unreadable (query failed or the binary
/// could not run); callers treat that the same as a mismatch.
fn tracked_remote_url<R: CommandRunner>(
    runner: &R,
    target: &str,
    remote: &str,
) -> Option<String> {
    let key = format!("remote.{}.url", remote);
    match runner.run("git", &["-C", target, "config", "--get", &key]) {
        Ok(output) if output.success => Some(output.stdout.trim().to_string()),
        Ok(_) => None,
        Err(err) => {
            warn!("could not read {} in {}: {}", key, target, err);
            None
        }
    }
}

/// Install fresh remote-tracking metadata without touching the rest of
/// the target directory.
///
/// Clones with `--no-checkout` into a temp subdirectory, moves only the
/// `.git` directory up into the target, and drops the temp directory.
/// Pre-existing non-VCS files in the target survive.
fn install_metadata<R: CommandRunner>(
    runner: &R,
    config: &RepositoryConfig,
    report: &mut ReconcileReport,
) {
    let target = config.target_path.as_path();
    let temp = target.join(TEMP_CLONE_DIR);

    clear_dir(&temp, report);

    let temp_str = temp.to_string_lossy().to_string();
    force_step(
        runner,
        report,
        "git",
        &["clone", "--no-checkout", &config.url, &temp_str],
    );

    if let Err(err) = fs::rename(temp.join(".git"), target.join(".git")) {
        report.record(format!(
            "failed to move metadata into {}: {}",
            target.display(),
            err
        ));
    }

    clear_dir(&temp, report);
}

fn clear_dir(dir: &Path, report: &mut ReconcileReport) {
    if !dir.exists() {
        return;
    }
    if let Err(err) = fs::remove_dir_all(dir) {
        report.record(format!("failed to remove {}: {}", dir.display(), err));
    }
}
