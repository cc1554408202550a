//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--seed <N>`: Seed the simulated id generator for reproducible runs
//! - `--find <ID>`: Look up a commit in the merged history afterwards
//! - `--json`: Also emit the final histories as JSON
//! - `--quiet` / `-q`: Minimal output
//! - `--debug`: Enable debug logging

use clap::Parser;

/// Revlog - an in-memory commit log walkthrough
///
/// Runs a scripted demonstration: commits on a main and a feature history,
/// truncation, a non-destructive merge, and lookup by id.
#[derive(Parser, Debug)]
#[command(name = "revlog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for the simulated id generator; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Look up this commit id in the merged history after the walkthrough
    #[arg(long, value_name = "ID")]
    pub find: Option<u32>,

    /// Also emit the final histories as JSON
    #[arg(long)]
    pub json: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
