//! Command to report whether a path exists.

use crate::error::CliError;
use crate::utils::{emit, formatter, load_configuration, GlobalOptions};
use clap::Args;
use pathtools::output::ExistenceReport;

/// Report whether a path exists and whether it is a directory.
///
/// Always exits 0 on a successful query; the answer is in the output.
#[derive(Args)]
pub struct ExistsCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ExistsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let report = ExistenceReport::probe(&self.path);
        emit(&formatter(&config).existence(&report)?);
        Ok(())
    }
}
