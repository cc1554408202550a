//! Binary entry point for the revlog demonstration walkthrough.

use revlog::cli;
use revlog::ui::output;

fn main() {
    if let Err(err) = cli::run() {
        output::error(format!("{err:#}"));
        std::process::exit(1);
    }
}
