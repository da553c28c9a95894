//! Output formatting for CLI reports.
//!
//! Reports come in three shapes: an existence check, a list of paths, and
//! a single resolved path. Each [`OutputFormat`] renders all three.

mod formatters;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::probe::file_or_dir_exists;
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter};

/// The outcome of an existence query for one path.
///
/// # Examples
///
/// ```
/// use pathtools::output::ExistenceReport;
///
/// let report = ExistenceReport::probe("/definitely/not/here");
/// assert!(!report.exists);
/// assert!(!report.is_dir);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExistenceReport {
    /// The path as given.
    pub path: String,
    /// Whether the path exists.
    pub exists: bool,
    /// Whether the path is a directory.
    pub is_dir: bool,
}

impl ExistenceReport {
    /// Query the filesystem and build a report.
    #[must_use]
    pub fn probe(path: &str) -> Self {
        let (exists, is_dir) = file_or_dir_exists(path);
        Self {
            path: path.to_string(),
            exists,
            is_dir,
        }
    }
}

/// Trait for rendering reports into a particular output format.
pub trait OutputFormatter {
    /// Render an existence report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn existence(&self, report: &ExistenceReport) -> Result<String>;

    /// Render a list of paths.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn paths(&self, paths: &[String]) -> Result<String>;

    /// Render a single path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn path(&self, path: &str) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
