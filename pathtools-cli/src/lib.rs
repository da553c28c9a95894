//! Library exports for pathtools-cli.
//!
//! Exposes the CLI structure so tests and tooling can inspect it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
