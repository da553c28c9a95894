//! Command to assert that a path is an existing directory.

use crate::error::CliError;
use crate::utils::{check, GlobalOptions};
use clap::Args;
use pathtools::dir_exists;

/// Succeed if a path exists and is a directory.
#[derive(Args)]
pub struct IsDirCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Invert the assertion (fail if the path is a directory)
    #[arg(long)]
    pub not: bool,
}

impl IsDirCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        check(dir_exists(&self.path), self.not, &self.path, "a directory")
    }
}
