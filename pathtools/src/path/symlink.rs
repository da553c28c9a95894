//! Symlink resolution.
//!
//! Resolution follows every symlink in a path and returns the canonical,
//! absolute, symlink-free result. The infallible variants fall back to the
//! input unchanged when resolution fails, so callers can always use the
//! result as a path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve every symlink in `path`.
///
/// # Errors
///
/// Returns an error if:
/// - The path, or a symlink target along it, does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - Any other I/O error occurs, including symlink loops
///
/// # Examples
///
/// ```no_run
/// use pathtools::path::try_resolve_symlinks;
/// use std::path::Path;
///
/// let resolved = try_resolve_symlinks(Path::new("/tmp")).unwrap();
/// assert!(resolved.is_absolute());
/// ```
pub fn try_resolve_symlinks(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| Error::from_io(path, e))
}

/// Resolve every symlink in `path`, or return `path` unchanged.
///
/// An empty path is returned as-is without touching the filesystem.
#[must_use]
pub fn resolve_symlinks_path(path: &Path) -> PathBuf {
    if path.as_os_str().is_empty() {
        return PathBuf::new();
    }

    match try_resolve_symlinks(path) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::debug!("keeping {} unresolved: {e}", path.display());
            path.to_path_buf()
        }
    }
}

/// Resolve every symlink in a path string, or return it unchanged.
///
/// Resolution failures of any kind are absorbed: a missing path, an I/O
/// error, or a resolved form that is not valid Unicode all return the
/// input.
///
/// # Examples
///
/// ```
/// use pathtools::path::resolve_symlinks;
///
/// assert_eq!(resolve_symlinks(""), "");
/// assert_eq!(resolve_symlinks("/no/such/path"), "/no/such/path");
/// ```
#[must_use]
pub fn resolve_symlinks(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let resolved = resolve_symlinks_path(Path::new(path));
    match resolved.into_os_string().into_string() {
        Ok(resolved) => resolved,
        Err(raw) => {
            log::debug!("keeping {path} unresolved: {raw:?} is not valid Unicode");
            path.to_string()
        }
    }
}
