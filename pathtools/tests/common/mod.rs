//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for filesystem trees and an RAII
//! guard for environment variables.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory populated with files, directories, and links.
///
/// The tree is removed when the fixture is dropped.
#[allow(dead_code)]
pub struct TreeFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Create an empty fixture.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Root of the fixture.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path for `relative` inside the fixture.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Same as [`TreeFixture::path`], as a `String`.
    pub fn path_str(&self, relative: &str) -> String {
        self.path(relative)
            .to_str()
            .expect("temp paths are UTF-8")
            .to_string()
    }

    /// Create a file with `contents`, creating parent directories.
    pub fn file(self, relative: &str, contents: &[u8]) -> Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, contents).expect("Failed to write file");
        self
    }

    /// Create a directory and its parents.
    pub fn dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.path(relative)).expect("Failed to create dir");
        self
    }

    /// Create a symlink at `link` pointing to `target` (both relative to
    /// the root).
    #[cfg(unix)]
    pub fn symlink(self, target: &str, link: &str) -> Self {
        std::os::unix::fs::symlink(self.path(target), self.path(link))
            .expect("Failed to create symlink");
        self
    }
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this guard must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Set `key` to `value` until the guard drops.
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Remove `key` until the guard drops.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Convert string literals into owned strings.
#[allow(dead_code)]
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
