//! Shared test utilities for E2E tests.
//!
//! Provides a prelude of commonly used test dependencies and a fixture
//! that lays out start-config + manifest trees in a temp directory.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_manifest("repos.json", manifests::GIT_MINIMAL);
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::manifests;
    pub use super::TestFixture;
}

/// Common manifest JSON snippets for testing.
#[allow(dead_code)]
pub mod manifests {
    /// Single git declaration with defaults.
    pub const GIT_MINIMAL: &str = r#"[
  { "type": "git", "url": "https://example.invalid/a.git", "path": "{rootPath}/a" }
]"#;

    /// Single svn declaration with defaults.
    pub const SVN_MINIMAL: &str = r#"[
  { "type": "svn", "url": "https://example.invalid/svn/trunk", "path": "{rootPath}/trunk" }
]"#;

    /// Two declarations for the same target path with different versions.
    pub const DUPLICATE_VERSIONS: &str = r#"[
  { "type": "git", "url": "https://example.invalid/old.git", "path": "{rootPath}/dup", "version": 1 },
  { "type": "git", "url": "https://example.invalid/new.git", "path": "{rootPath}/dup", "version": 2 }
]"#;

    /// One invalid entry among valid ones.
    pub const WITH_INVALID_TYPE: &str = r#"[
  { "type": "hg", "url": "https://example.invalid/h", "path": "{rootPath}/h" },
  { "type": "git", "url": "https://example.invalid/ok.git", "path": "{rootPath}/ok" }
]"#;

    /// Not valid JSON at all.
    pub const MALFORMED: &str = "{ this is not json";
}

/// Temp-directory fixture with a `repos/` scan tree and a start-config.
pub struct TestFixture {
    pub temp: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    pub fn new() -> Self {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("repos").create_dir_all().unwrap();
        let fixture = Self { temp };
        fixture.write_start_config(r#"{ "path": "repos", "rootPath": "checkout" }"#);
        fixture
    }

    /// Path of the fixture's start-config file.
    pub fn start_config(&self) -> std::path::PathBuf {
        self.temp.child("start.json").path().to_path_buf()
    }

    pub fn write_start_config(&self, content: &str) {
        self.temp.child("start.json").write_str(content).unwrap();
    }

    /// Write a manifest file under the scan tree.
    pub fn with_manifest(self, name: &str, content: &str) -> Self {
        self.temp
            .child("repos")
            .child(name)
            .write_str(content)
            .unwrap();
        self
    }
}
