//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHTOOLS_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::path::{clean_paths, DEFAULT_DELIMITER};
use std::env;

/// Overrides the path-list delimiter.
pub const DELIMITER_ENV: &str = "PATHTOOLS_DELIMITER";

/// Overrides the fallback list; itself a `,`-delimited path list.
pub const FALLBACK_ENV: &str = "PATHTOOLS_FALLBACK";

/// Overrides the output format (`human` or `json`).
pub const FORMAT_ENV: &str = "PATHTOOLS_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathtools::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// A blank `PATHTOOLS_FALLBACK` leaves the fallback untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if `PATHTOOLS_FORMAT` names an unknown format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(delimiter) = env::var(DELIMITER_ENV) {
            config.delimiter = Some(delimiter);
        }

        if let Ok(fallback) = env::var(FALLBACK_ENV) {
            let fallback = clean_paths(&fallback, DEFAULT_DELIMITER);
            if !fallback.is_empty() {
                config.fallback = Some(fallback);
            }
        }

        if let Ok(format) = env::var(FORMAT_ENV) {
            let format: OutputFormat = format.parse().map_err(|message| Error::Validation {
                field: FORMAT_ENV.into(),
                message,
            })?;
            config.output_format = Some(format);
        }

        Ok(())
    }
}
