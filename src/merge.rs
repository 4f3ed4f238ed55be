//! Declaration merging
//!
//! Multiple manifest files may declare a repository for the same target
//! directory. The merge keeps exactly one declaration per resolved target
//! path: the one with the highest version. The tie policy is
//! latest-wins-at-equal-version — an incoming declaration replaces the
//! kept one when its version is greater than *or equal to* the kept
//! version. Discovery sorts manifest paths before parsing, so "later" is
//! deterministic. Output preserves first-occurrence order of each
//! distinct target path.

use std::collections::HashMap;
use std::path::PathBuf;

use log::debug;

use crate::manifest::RepositoryConfig;

/// Deduplicate declarations by target path, highest version winning.
pub fn merge(configs: Vec<RepositoryConfig>) -> Vec<RepositoryConfig> {
    let mut merged: Vec<RepositoryConfig> = Vec::new();
    let mut slot_by_path: HashMap<PathBuf, usize> = HashMap::new();

    for config in configs {
        match slot_by_path.get(&config.target_path) {
            Some(&slot) => {
                if config.version >= merged[slot].version {
                    debug!(
                        "replacing declaration for {} (version {} -> {})",
                        config.target_path.display(),
                        merged[slot].version,
                        config.version
                    );
                    merged[slot] = config;
                }
            }
            None => {
                slot_by_path.insert(config.target_path.clone(), merged.len());
                merged.push(config);
            }
        }
    }

    merged
}
