//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathtools::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { delimiter: Some(String::new()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if:
    /// - The delimiter is empty (which would split into single characters)
    /// - A fallback entry is blank
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref delimiter) = config.delimiter {
            if delimiter.is_empty() {
                return Err(Error::Validation {
                    field: "delimiter".into(),
                    message: "Delimiter must not be empty".into(),
                });
            }
        }

        if let Some(ref fallback) = config.fallback {
            if let Some(index) = fallback.iter().position(|p| p.trim().is_empty()) {
                return Err(Error::Validation {
                    field: format!("fallback[{index}]"),
                    message: "Fallback paths must not be blank".into(),
                });
            }
        }

        Ok(())
    }
}
