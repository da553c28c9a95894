#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathtools
//!
//! Small filesystem and path-string utilities.
//!
//! ## Modules
//!
//! - [`probe`]: existence checks that collapse every OS error to `false`
//! - [`path`]: lexical cleaning, delimited path lists with a fallback, and
//!   symlink resolution
//! - [`config`]: layered settings (delimiter, fallback, output format)
//! - [`output`]: human and JSON rendering for CLI reports
//! - [`Error`] and [`Result`]: errors for the diagnostic and config APIs
//! - [`Logger`] and [`LogLevel`]: a stderr backend for the `log` facade
//!
//! ## Examples
//!
//! ```
//! use pathtools::{clean_paths, clean_paths_default, file_or_dir_exists};
//!
//! assert_eq!(clean_paths("a/./b, c/../d", ","), vec!["a/b", "d"]);
//!
//! let fallback = vec!["/etc/app".to_string()];
//! assert_eq!(&*clean_paths_default("", ",", &fallback), fallback.as_slice());
//!
//! assert_eq!(file_or_dir_exists("/definitely/not/here"), (false, false));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod probe;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    clean, clean_paths, clean_paths_default, resolve_symlinks, resolve_symlinks_path,
    try_resolve_symlinks, PathClean, PathList,
};
pub use probe::{dir_exists, file_exists, file_exists_of_size, file_or_dir_exists, probe, PathKind};
