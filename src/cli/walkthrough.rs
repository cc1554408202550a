//! walkthrough - the scripted demonstration driver
//!
//! Sequences the commit log operations end to end: commits on a main and a
//! feature history, truncation, a non-destructive merge, and lookup by id.
//! The driver owns all printing; the histories themselves never print.

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::cli::Cli;
use crate::core::history::CommitLog;
use crate::core::ids::{IdSource, SimulatedIds};
use crate::core::types::CommitId;
use crate::ui::output::{self, Verbosity};

/// Final state of the walkthrough, for `--json` output.
#[derive(Debug, Serialize)]
struct Histories<'a> {
    main: &'a CommitLog,
    feature: &'a CommitLog,
    merged: &'a CommitLog,
}

/// Run the demonstration walkthrough.
pub fn walkthrough(cli: &Cli, verbosity: Verbosity) -> Result<()> {
    let mut ids = match cli.seed {
        Some(seed) => {
            output::debug(format!("id source seeded with {}", seed), verbosity);
            SimulatedIds::with_seed(seed)
        }
        None => SimulatedIds::new(),
    };

    let mut main = CommitLog::new();
    commit(&mut main, "Initial commit", &mut ids, verbosity);
    let readme_id = commit(&mut main, "Add README", &mut ids, verbosity);
    commit(&mut main, "Implement login system", &mut ids, verbosity);

    let mut feature = CommitLog::new();
    commit(&mut feature, "Start feature X", &mut ids, verbosity);
    commit(&mut feature, "Fix bug in feature X", &mut ids, verbosity);

    section("Main Branch", verbosity);
    output::print(main.render(), verbosity);

    section("Feature Branch", verbosity);
    output::print(feature.render(), verbosity);

    section("Truncate last commit on main", verbosity);
    output::print(main.truncate_last(), verbosity);
    output::print(main.render(), verbosity);

    section("Merged History", verbosity);
    let mut merged = CommitLog::merge(&main, &feature);
    output::print("Branches merged.", verbosity);
    output::debug(
        format!("merged history holds {} commits", merged.len()),
        verbosity,
    );
    output::print(merged.truncate_last(), verbosity);
    output::print(merged.render(), verbosity);

    section("Main Branch Unchanged after merge", verbosity);
    output::print(main.render(), verbosity);

    section("Feature Branch Unchanged after merge", verbosity);
    output::print(feature.render(), verbosity);

    section("Lookup by id", verbosity);
    show(&main, readme_id, verbosity);

    if let Some(raw) = cli.find {
        let id = CommitId::new(raw).context("invalid --find id")?;
        show(&merged, id, verbosity);
    }

    if cli.json {
        let histories = Histories {
            main: &main,
            feature: &feature,
            merged: &merged,
        };
        let json = serde_json::to_string_pretty(&histories)
            .context("failed to serialize histories")?;
        println!("{}", json);
    }

    Ok(())
}

/// Append a commit and print the confirmation line.
fn commit(
    log: &mut CommitLog,
    message: &str,
    ids: &mut dyn IdSource,
    verbosity: Verbosity,
) -> CommitId {
    let id = log.append(message, ids);
    output::print(format!("Committed: [{}] {}", id, message), verbosity);
    id
}

/// Print a lookup result for the given id.
fn show(log: &CommitLog, id: CommitId, verbosity: Verbosity) {
    match log.find(id) {
        Some(record) => output::print(format!("Commit found: {}", record), verbosity),
        None => output::print(format!("Commit with id {} not found.", id), verbosity),
    }
}

/// Print a section header.
fn section(title: &str, verbosity: Verbosity) {
    output::print(format!("\n== {} ==", title), verbosity);
}
