//! Configuration schema definitions.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::path::{PathList, DEFAULT_DELIMITER};

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; unset fields
/// fall back to built-in defaults through the accessor methods.
///
/// # Examples
///
/// ```
/// use pathtools::config::Config;
///
/// let config = Config {
///     delimiter: Some(":".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.delimiter(), ":");
/// assert!(config.fallback().is_empty());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Delimiter separating entries in a path list.
    pub delimiter: Option<String>,

    /// Paths used when a path list is blank.
    pub fallback: Option<Vec<String>>,

    /// Output format for CLI reports.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The configured delimiter, or [`DEFAULT_DELIMITER`].
    #[must_use]
    pub fn delimiter(&self) -> &str {
        self.delimiter.as_deref().unwrap_or(DEFAULT_DELIMITER)
    }

    /// The configured fallback, or an empty list.
    #[must_use]
    pub fn fallback(&self) -> &[String] {
        self.fallback.as_deref().unwrap_or_default()
    }

    /// The configured output format, or [`OutputFormat::Human`].
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Build the [`PathList`] these settings describe.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathtools::config::Config;
    ///
    /// let config = Config {
    ///     fallback: Some(vec!["/srv".to_string()]),
    ///     ..Default::default()
    /// };
    /// assert_eq!(&*config.path_list().clean_or_fallback(""), ["/srv"]);
    /// ```
    #[must_use]
    pub fn path_list(&self) -> PathList {
        PathList::new(self.delimiter()).with_fallback(self.fallback().to_vec())
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge_from(&mut self, other: &Config) {
        if other.delimiter.is_some() {
            self.delimiter.clone_from(&other.delimiter);
        }
        if other.fallback.is_some() {
            self.fallback.clone_from(&other.fallback);
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
    }
}

/// Output format for reports.
///
/// # Examples
///
/// ```
/// use pathtools::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one item per line.
    #[default]
    Human,
    /// JSON output format.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}
