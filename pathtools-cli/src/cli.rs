//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CleanCommand, CompletionsCommand, ExistsCommand, HasSizeCommand, IsDirCommand,
    IsFileCommand, ResolveCommand,
};
use clap::{Parser, Subcommand};
use pathtools::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for probing files and cleaning path lists.
#[derive(Parser)]
#[command(name = "pathtools")]
#[command(version, about = "Probe files and clean delimited path lists", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read settings from this configuration file
    #[arg(long, value_name = "PATH", global = true, env = "PATHTOOLS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for reports
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Report whether a path exists and whether it is a directory
    Exists(ExistsCommand),

    /// Succeed if a path exists and is not a directory
    IsFile(IsFileCommand),

    /// Succeed if a path exists and is a directory
    IsDir(IsDirCommand),

    /// Succeed if a file exists with exactly the given size
    HasSize(HasSizeCommand),

    /// Print a path with all symlinks resolved
    Resolve(ResolveCommand),

    /// Split and clean a delimited path list
    Clean(CleanCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
