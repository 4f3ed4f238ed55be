//! # Manifest Sync Library
//!
//! Core functionality for the `manifest-sync` command-line tool: discover
//! declarative repository-manifest files under a root directory, merge
//! duplicate declarations for the same target path, and force each target
//! directory's working copy onto the declared git or svn state.
//!
//! ## Core Concepts
//!
//! - **Start-config (`config`)**: the single top-level file naming the
//!   scan root, the manifest file-name prefix, and the `{rootPath}`
//!   substitution value.
//! - **Manifests (`manifest`)**: `<prefix>*.json` files, each a JSON
//!   array of repository declarations, normalized into canonical
//!   [`manifest::RepositoryConfig`] records.
//! - **Merging (`merge`)**: deduplication by resolved target path with a
//!   highest-version-wins policy.
//! - **Reconciliation (`reconcile`)**: the per-repository convergence
//!   state machine, issuing force-only VCS operations through the
//!   [`runner::CommandRunner`] seam.
//!
//! ## Execution Flow
//!
//! 1. Load the start-config.
//! 2. Scan for manifest files (sorted for determinism).
//! 3. Parse each file with partial-success semantics.
//! 4. Merge declarations by target path.
//! 5. Reconcile each surviving declaration sequentially.
//!
//! Failures below the start-config level never abort a run: bad manifest
//! entries and files are skipped with diagnostics, and VCS command
//! failures are collected per repository and summarized at the end.

pub mod config;
pub mod error;
pub mod manifest;
pub mod merge;
pub mod output;
pub mod path;
pub mod pipeline;
pub mod reconcile;
pub mod runner;
pub mod scanner;

#[cfg(test)]
mod merge_proptest;
