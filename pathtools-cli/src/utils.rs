//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and output handling.

use crate::error::CliError;
use pathtools::output::OutputFormatter;
use pathtools::{Config, ConfigBuilder, Error as LibError, OutputFormat};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Output format requested on the command line.
    pub format: Option<OutputFormat>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. The user config file
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        builder = builder.with_file(path);
    }

    if global.format.is_some() {
        builder = builder.with_config(Config {
            output_format: global.format,
            ..Default::default()
        });
    }

    builder.build().map_err(|e| match e {
        // A named config file that is missing is a configuration problem.
        LibError::PathNotFound { .. } => CliError::Config(e.to_string()),
        e => CliError::from(e),
    })
}

/// Create the formatter selected by configuration.
pub fn formatter(config: &Config) -> Box<dyn OutputFormatter> {
    config.output_format().create_formatter()
}

/// Print rendered output, skipping empty renderings.
pub fn emit(rendered: &str) {
    if !rendered.is_empty() {
        println!("{rendered}");
    }
}

/// Turn a predicate result into success or a semantic failure.
///
/// `not` inverts the predicate. `describe` names the condition for the
/// failure message, e.g. "is a file".
pub fn check(holds: bool, not: bool, path: &str, describe: &str) -> Result<(), CliError> {
    if holds != not {
        return Ok(());
    }

    let message = if not {
        format!("Assertion failed: {path} {describe}")
    } else {
        format!("Assertion failed: {path} is not {describe}")
    };
    Err(CliError::SemanticFailure(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_truth_table() {
        assert!(check(true, false, "p", "a file").is_ok());
        assert!(check(false, true, "p", "a file").is_ok());
        assert!(check(false, false, "p", "a file").is_err());
        assert!(check(true, true, "p", "a file").is_err());
    }

    #[test]
    fn test_check_messages() {
        let err = check(false, false, "/x", "a directory").unwrap_err();
        assert_eq!(err.to_string(), "Assertion failed: /x is not a directory");

        let err = check(true, true, "/x", "a directory").unwrap_err();
        assert_eq!(err.to_string(), "Assertion failed: /x a directory");
    }
}
