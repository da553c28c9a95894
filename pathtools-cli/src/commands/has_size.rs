//! Command to assert that a file has an exact byte size.

use crate::error::CliError;
use crate::utils::{check, GlobalOptions};
use clap::Args;
use pathtools::file_exists_of_size;

/// Succeed if a non-directory exists at the path with exactly `BYTES` bytes.
#[derive(Args)]
pub struct HasSizeCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Expected size in bytes
    #[arg(value_name = "BYTES")]
    pub size: u64,

    /// Invert the assertion
    #[arg(long)]
    pub not: bool,
}

impl HasSizeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let describe = format!("a file of {} bytes", self.size);
        check(
            file_exists_of_size(&self.path, self.size),
            self.not,
            &self.path,
            &describe,
        )
    }
}
