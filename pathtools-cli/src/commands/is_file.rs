//! Command to assert that a path is an existing non-directory.

use crate::error::CliError;
use crate::utils::{check, GlobalOptions};
use clap::Args;
use pathtools::file_exists;

/// Succeed if a path exists and is not a directory.
#[derive(Args)]
pub struct IsFileCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Invert the assertion (fail if the path is a file)
    #[arg(long)]
    pub not: bool,
}

impl IsFileCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        check(file_exists(&self.path), self.not, &self.path, "a file")
    }
}
