//! Command to print a path with symlinks resolved.

use crate::error::CliError;
use crate::utils::{emit, formatter, load_configuration, GlobalOptions};
use clap::Args;
use pathtools::{resolve_symlinks, try_resolve_symlinks};
use std::path::Path;

/// Print a path with all symlinks resolved.
///
/// Paths that cannot be resolved are printed unchanged unless `--strict`
/// is given.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path to resolve
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Fail instead of echoing the input when resolution fails
    #[arg(long)]
    pub strict: bool,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let resolved = if self.strict {
            let resolved = try_resolve_symlinks(Path::new(&self.path))?;
            resolved.to_str().map(str::to_string).ok_or_else(|| {
                CliError::InvalidArguments(format!(
                    "resolved path is not valid UTF-8: {}",
                    resolved.display()
                ))
            })?
        } else {
            resolve_symlinks(&self.path)
        };

        emit(&formatter(&config).path(&resolved)?);
        Ok(())
    }
}
