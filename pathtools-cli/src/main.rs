//! Main entry point for the pathtools CLI.
//!
//! Commands:
//! - `exists`, `is-file`, `is-dir`, `has-size`: Probe the filesystem
//! - `resolve`: Resolve symlinks in a path
//! - `clean`: Split and clean a delimited path list
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let _level = pathtools::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        format: cli.format,
    };

    let result = match cli.command {
        cli::Command::Exists(cmd) => cmd.execute(&global),
        cli::Command::IsFile(cmd) => cmd.execute(&global),
        cli::Command::IsDir(cmd) => cmd.execute(&global),
        cli::Command::HasSize(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Clean(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            // A failed predicate under --quiet speaks only through the exit code.
            if !(global.quiet && e.is_semantic()) {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
