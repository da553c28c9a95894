//! Path strings: lexical cleaning, delimited lists, and symlink resolution.
//!
//! # Cleaning
//!
//! [`clean`] rewrites a path into its shortest lexically equivalent form
//! (`a/./b/../c` becomes `a/c`). It never consults the filesystem and
//! cannot fail.
//!
//! # Path lists
//!
//! [`clean_paths`] splits a delimited string (typically read from an
//! environment variable or a config field) and cleans each entry.
//! [`clean_paths_default`] substitutes a caller-supplied fallback when the
//! input is blank. [`PathList`] bundles a delimiter and fallback.
//!
//! ```
//! use pathtools::path::{clean_paths, clean_paths_default};
//!
//! assert_eq!(clean_paths("a/./b, c/../d", ","), vec!["a/b", "d"]);
//!
//! let fallback = vec!["/etc/app".to_string()];
//! assert_eq!(&*clean_paths_default(" ", ",", &fallback), fallback.as_slice());
//! ```
//!
//! # Symlinks
//!
//! [`resolve_symlinks`] follows symlinks to the real path, returning the
//! input unchanged when that fails. [`try_resolve_symlinks`] reports the
//! failure instead.

pub mod clean;
pub mod list;
pub mod symlink;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use clean::{clean, PathClean, CURRENT_DIR};
pub use list::{clean_paths, clean_paths_default, PathList, DEFAULT_DELIMITER};
pub use symlink::{resolve_symlinks, resolve_symlinks_path, try_resolve_symlinks};
