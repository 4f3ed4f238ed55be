//! # Pipeline Orchestration
//!
//! Wires the stages together: scan the manifest tree, parse each file,
//! merge duplicate declarations, then reconcile every surviving
//! declaration sequentially. Commands call these entry points so the same
//! flow is reachable from tests without the CLI.
//!
//! There is no state beyond the filesystem: every invocation rebuilds the
//! declaration set from the manifests on disk.

use log::{error, info};

use crate::config::StartConfig;
use crate::manifest::{self, RepositoryConfig};
use crate::merge;
use crate::reconcile::{ReconcileReport, Reconciler};
use crate::runner::CommandRunner;
use crate::scanner;

/// Discover, parse, and merge every repository declaration under the
/// start-config's scan path.
///
/// A manifest file that fails to parse contributes nothing and is logged;
/// the remaining files still contribute (file-level partial success).
pub fn discover_repositories(start: &StartConfig) -> Vec<RepositoryConfig> {
    let files = scanner::scan(&start.scan_path, &start.prefix);
    info!(
        "discovered {} manifest file(s) under {}",
        files.len(),
        start.scan_path.display()
    );

    let mut configs = Vec::new();
    for file in &files {
        match manifest::parse_file(file, &start.root_path) {
            Ok(mut parsed) => configs.append(&mut parsed),
            Err(err) => error!("skipping manifest: {}", err),
        }
    }

    merge::merge(configs)
}

/// Reconcile every declaration in merged-collection order.
///
/// Strictly sequential; a repository that fails never prevents the next
/// one from being attempted.
pub fn reconcile_all<R: CommandRunner>(
    runner: &R,
    configs: &[RepositoryConfig],
) -> Vec<ReconcileReport> {
    let reconciler = Reconciler::new(runner);
    configs
        .iter()
        .map(|config| {
            info!(
                "reconciling {} ({} @ {})",
                config.target_path.display(),
                config.kind(),
                config.url
            );
            reconciler.reconcile(config)
        })
        .collect()
}
