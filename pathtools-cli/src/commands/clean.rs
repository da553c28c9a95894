//! Command to split and clean a delimited path list.

use crate::error::CliError;
use crate::utils::{emit, formatter, load_configuration, GlobalOptions};
use clap::Args;
use pathtools::PathList;

/// Split a delimited list of paths and clean each entry.
///
/// The delimiter and fallback default to the configured values. A blank
/// list yields the fallback.
#[derive(Args)]
pub struct CleanCommand {
    /// Delimited path list
    #[arg(value_name = "LIST", allow_hyphen_values = true, conflicts_with = "env")]
    pub list: Option<String>,

    /// Delimiter between entries
    #[arg(long, short = 'd')]
    pub delimiter: Option<String>,

    /// Path to use when the list is blank (repeatable)
    #[arg(long, value_name = "PATH")]
    pub fallback: Vec<String>,

    /// Read the list from this environment variable
    #[arg(long, value_name = "VAR")]
    pub env: Option<String>,
}

impl CleanCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        if matches!(self.delimiter.as_deref(), Some("")) {
            return Err(CliError::InvalidArguments(
                "--delimiter must not be empty".into(),
            ));
        }

        let delimiter = self
            .delimiter
            .unwrap_or_else(|| config.delimiter().to_string());
        let fallback = if self.fallback.is_empty() {
            config.fallback().to_vec()
        } else {
            self.fallback
        };
        let list = PathList::new(delimiter).with_fallback(fallback);

        let cleaned = match (self.env, self.list) {
            (Some(var), _) => list.from_env(&var),
            (None, Some(raw)) => list.clean_or_fallback(&raw).into_owned(),
            (None, None) => list.fallback().to_vec(),
        };

        emit(&formatter(&config).paths(&cleaned)?);
        Ok(())
    }
}
