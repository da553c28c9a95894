//! Existence probes for files and directories.
//!
//! Every probe follows symlinks and performs a single metadata query. The
//! boolean functions never fail: any error from the operating system is
//! treated as "does not exist". Callers that need to know *why* a query
//! failed can use [`probe`], which reports not-found and permission
//! failures as distinct errors.
//!
//! # Examples
//!
//! ```
//! use pathtools::probe::{dir_exists, file_exists, file_or_dir_exists};
//!
//! let dir = std::env::temp_dir();
//! assert!(dir_exists(&dir));
//! assert!(!file_exists(&dir));
//! assert_eq!(file_or_dir_exists("/definitely/not/here"), (false, false));
//! ```

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// What a successful metadata query found at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// A regular file of `len` bytes.
    File {
        /// Size of the file in bytes.
        len: u64,
    },
    /// A directory.
    Directory,
    /// Anything else that exists: sockets, FIFOs, device nodes.
    Other {
        /// Size reported by the metadata query.
        len: u64,
    },
}

impl PathKind {
    /// Returns `true` for directories.
    #[must_use]
    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Byte length, or `None` for directories.
    #[must_use]
    pub const fn byte_len(self) -> Option<u64> {
        match self {
            Self::File { len } | Self::Other { len } => Some(len),
            Self::Directory => None,
        }
    }
}

/// Query the filesystem for `path`, following symlinks.
///
/// # Errors
///
/// Returns:
/// - [`Error::PathNotFound`] if nothing exists at `path` (including a
///   dangling symlink)
/// - [`Error::PermissionDenied`] if the metadata cannot be read
/// - [`Error::Io`] for any other failure
///
/// # Examples
///
/// ```
/// use pathtools::probe::{probe, PathKind};
///
/// let kind = probe(std::env::temp_dir()).unwrap();
/// assert_eq!(kind, PathKind::Directory);
/// assert!(probe("/definitely/not/here").unwrap_err().is_not_found());
/// ```
pub fn probe<P: AsRef<Path>>(path: P) -> Result<PathKind> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| Error::from_io(path, e))?;

    let kind = if metadata.is_dir() {
        PathKind::Directory
    } else if metadata.is_file() {
        PathKind::File {
            len: metadata.len(),
        }
    } else {
        PathKind::Other {
            len: metadata.len(),
        }
    };
    Ok(kind)
}

/// Run [`probe`] and absorb any failure, logging it at debug level.
fn probe_quietly(path: &Path) -> Option<PathKind> {
    match probe(path) {
        Ok(kind) => Some(kind),
        Err(e) => {
            log::debug!("probe of {} absorbed: {e}", path.display());
            None
        }
    }
}

/// Determine whether `path` exists, and whether it is a directory.
///
/// Returns `(exists, is_dir)`. Any failure of the underlying query yields
/// `(false, false)`; the reason is not reported.
pub fn file_or_dir_exists<P: AsRef<Path>>(path: P) -> (bool, bool) {
    match probe_quietly(path.as_ref()) {
        Some(kind) => (true, kind.is_dir()),
        None => (false, false),
    }
}

/// Returns `true` if `path` exists and is not a directory.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    let (exists, is_dir) = file_or_dir_exists(path);
    exists && !is_dir
}

/// Returns `true` if `path` exists and is a directory.
pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
    let (exists, is_dir) = file_or_dir_exists(path);
    exists && is_dir
}

/// Returns `true` if `path` exists, is not a directory, and is exactly
/// `size` bytes long.
///
/// # Examples
///
/// ```
/// use pathtools::probe::file_exists_of_size;
///
/// let file = tempfile::NamedTempFile::new().unwrap();
/// std::fs::write(file.path(), b"hello").unwrap();
/// assert!(file_exists_of_size(file.path(), 5));
/// assert!(!file_exists_of_size(file.path(), 6));
/// ```
pub fn file_exists_of_size<P: AsRef<Path>>(path: P, size: u64) -> bool {
    probe_quietly(path.as_ref()).and_then(PathKind::byte_len) == Some(size)
}
