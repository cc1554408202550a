//! cli
//!
//! Command-line layer for the demonstration binary.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and flags
//! - Delegate to the walkthrough driver
//! - Does NOT manipulate histories directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! [`walkthrough`]. All history operations live in [`crate::core`]; all
//! printing goes through [`crate::ui::output`].

pub mod args;
pub mod walkthrough;

pub use args::Cli;

use anyhow::Result;

use crate::ui::output::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    walkthrough::walkthrough(&cli, verbosity)
}
