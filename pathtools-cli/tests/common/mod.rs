//! Common test utilities for CLI integration tests.
//!
//! Every command runs with `HOME` pointed into a temporary directory and the
//! `PATHTOOLS_*` variables cleared, so a developer's own configuration never
//! leaks into a test.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENV_VARS: [&str; 5] = [
    "PATHTOOLS_CONFIG",
    "PATHTOOLS_DELIMITER",
    "PATHTOOLS_FALLBACK",
    "PATHTOOLS_FORMAT",
    "PATHTOOLS_LOG_MODE",
];

/// Isolated test environment backed by a temporary directory.
pub struct TestEnv {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Command for the pathtools binary with an isolated environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathtools").expect("Failed to find pathtools binary");
        cmd.env("HOME", self.path().join("home"));
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Create a file with the given contents, including parent directories.
    pub fn file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a directory, including parents.
    pub fn dir(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write `~/.pathtools/config.yaml` for this environment.
    pub fn user_config(&self, yaml: &str) -> PathBuf {
        self.file("home/.pathtools/config.yaml", yaml.as_bytes())
    }
}

/// Convert a path to `&str` for use as a CLI argument.
#[allow(dead_code)]
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("test paths are UTF-8")
}
