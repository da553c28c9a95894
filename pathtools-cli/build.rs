//! Build script for pathtools-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here by hand.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("pathtools")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Probe files and clean delimited path lists")
        .long_about(
            "Command-line tool for checking files and directories, resolving symlinks, \
             and normalizing delimited lists of paths",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read settings from this configuration file")
                .value_name("PATH")
                .global(true)
                .env("PATHTOOLS_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format for reports")
                .value_parser(["human", "json"])
                .global(true),
        )
        .subcommands(vec![
            Command::new("exists")
                .about("Report whether a path exists and whether it is a directory"),
            Command::new("is-file").about("Succeed if a path exists and is not a directory"),
            Command::new("is-dir").about("Succeed if a path exists and is a directory"),
            Command::new("has-size")
                .about("Succeed if a file exists with exactly the given size"),
            Command::new("resolve").about("Print a path with all symlinks resolved"),
            Command::new("clean")
                .about("Split and clean a delimited path list")
                .long_about(
                    "Split a delimited list of paths, trim and clean each entry, \
                     and substitute a fallback when the list is blank",
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR").ok_or_else(|| std::io::Error::other("OUT_DIR not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("pathtools.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
