//! core::history
//!
//! The in-memory commit log.
//!
//! # Architecture
//!
//! A [`CommitLog`] owns an append-ordered sequence of [`CommitRecord`]s,
//! oldest first, stored in a growable owned container. Value semantics fall
//! out of ownership: cloning a log deep-copies every record, so two distinct
//! logs never alias storage and mutating one is never observable through
//! another. Merging builds a third log from deep copies of both inputs
//! without touching either.
//!
//! # Invariants
//!
//! - Two distinct logs never share a record
//! - Append order is preserved; rendering lists oldest to newest
//! - Identifier collisions are permitted and never detected
//!
//! # Example
//!
//! ```
//! use revlog::core::history::CommitLog;
//! use revlog::core::ids::SequentialIds;
//!
//! let mut ids = SequentialIds::new();
//! let mut log = CommitLog::new();
//! log.append("Initial commit", &mut ids);
//! log.append("Add README", &mut ids);
//!
//! assert_eq!(log.render(), "[0] Initial commit <- [1] Add README");
//! ```

use serde::{Deserialize, Serialize};

use super::ids::IdSource;
use super::types::{CommitId, UtcTimestamp};

/// Separator between rendered records. Each commit points back at the
/// record it builds on.
pub const RENDER_SEPARATOR: &str = " <- ";

/// Rendering of a log with no commits.
pub const EMPTY_RENDER: &str = "(no commits)";

/// A single commit record.
///
/// Each record is exclusively owned by the log holding it. Operations that
/// would otherwise introduce sharing (clone, merge, duplicate) allocate
/// fresh records instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Simulated identifier assigned at append time.
    pub id: CommitId,
    /// Caller-supplied description. Immutable after creation.
    pub message: String,
    /// Moment the record was created.
    pub created_at: UtcTimestamp,
}

impl std::fmt::Display for CommitRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.id, self.message)
    }
}

/// Outcome of removing the most recent commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TruncateOutcome {
    /// The most recent record was removed; the caller receives it.
    Removed(CommitRecord),
    /// The log had no commits; nothing changed.
    Empty,
}

impl TruncateOutcome {
    /// Check whether a record was removed.
    pub fn removed(&self) -> bool {
        matches!(self, TruncateOutcome::Removed(_))
    }
}

impl std::fmt::Display for TruncateOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TruncateOutcome::Removed(_) => write!(f, "Last commit removed."),
            TruncateOutcome::Empty => write!(f, "No commits to remove."),
        }
    }
}

/// An append-ordered commit history with value semantics.
///
/// Records are held oldest first. Appending and truncating the tail are
/// O(1); lookup is a linear scan from the oldest record.
///
/// `Clone` is the explicit deep-copy point: every record of the clone is
/// freshly allocated, so clones are fully independent of their source.
///
/// # Example
///
/// ```
/// use revlog::core::history::CommitLog;
/// use revlog::core::ids::SequentialIds;
///
/// let mut ids = SequentialIds::new();
/// let mut log = CommitLog::new();
/// let id = log.append("Initial commit", &mut ids);
///
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.find(id).unwrap().message, "Initial commit");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitLog {
    entries: Vec<CommitRecord>,
}

impl CommitLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit with the given message.
    ///
    /// Draws an identifier from `ids`, stamps the record with the current
    /// time, and links it as the new most-recent entry. Always succeeds;
    /// identifier collisions with earlier records are permitted.
    ///
    /// Returns the identifier assigned to the new record.
    pub fn append(&mut self, message: impl Into<String>, ids: &mut dyn IdSource) -> CommitId {
        let record = CommitRecord {
            id: ids.next_id(),
            message: message.into(),
            created_at: UtcTimestamp::now(),
        };
        let id = record.id;
        self.entries.push(record);
        id
    }

    /// Render the full history as a single line, oldest to newest.
    ///
    /// Records are shown as `[id] message` joined by [`RENDER_SEPARATOR`].
    /// An empty log renders as [`EMPTY_RENDER`].
    ///
    /// # Example
    ///
    /// ```
    /// use revlog::core::history::{CommitLog, EMPTY_RENDER};
    ///
    /// let log = CommitLog::new();
    /// assert_eq!(log.render(), EMPTY_RENDER);
    /// ```
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return EMPTY_RENDER.to_string();
        }

        self.entries
            .iter()
            .map(CommitRecord::to_string)
            .collect::<Vec<_>>()
            .join(RENDER_SEPARATOR)
    }

    /// Remove the most recently appended commit.
    ///
    /// Removing from an empty log is a normal outcome, not an error: the
    /// log is left empty and [`TruncateOutcome::Empty`] is returned.
    pub fn truncate_last(&mut self) -> TruncateOutcome {
        match self.entries.pop() {
            Some(record) => TruncateOutcome::Removed(record),
            None => TruncateOutcome::Empty,
        }
    }

    /// Find a commit by id.
    ///
    /// Scans from the oldest record and returns the first match. Ids are
    /// not guaranteed unique; later records with the same id are shadowed.
    pub fn find(&self, id: CommitId) -> Option<&CommitRecord> {
        self.entries.iter().find(|record| record.id == id)
    }

    /// Merge two histories into a new one.
    ///
    /// The result holds a deep copy of every record of `first` in order,
    /// followed by a deep copy of every record of `second`. Neither input
    /// is mutated, and the result shares no record with either.
    ///
    /// # Example
    ///
    /// ```
    /// use revlog::core::history::CommitLog;
    /// use revlog::core::ids::SequentialIds;
    ///
    /// let mut ids = SequentialIds::new();
    /// let mut main = CommitLog::new();
    /// main.append("Initial commit", &mut ids);
    /// let mut feature = CommitLog::new();
    /// feature.append("Start feature X", &mut ids);
    ///
    /// let merged = CommitLog::merge(&main, &feature);
    /// assert_eq!(merged.render(), "[0] Initial commit <- [1] Start feature X");
    /// assert_eq!(main.len(), 1);
    /// assert_eq!(feature.len(), 1);
    /// ```
    pub fn merge(first: &CommitLog, second: &CommitLog) -> CommitLog {
        let mut entries = Vec::with_capacity(first.len() + second.len());
        entries.extend(first.entries.iter().cloned());
        entries.extend(second.entries.iter().cloned());
        CommitLog { entries }
    }

    /// Return an independent deep copy of this log.
    ///
    /// Equivalent to `clone`; kept as an explicit operation name on the
    /// history surface.
    pub fn duplicate(&self) -> CommitLog {
        self.clone()
    }

    /// Number of commits in the log.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log has no commits.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent commit, if any.
    pub fn last(&self) -> Option<&CommitRecord> {
        self.entries.last()
    }

    /// Iterate over records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &CommitRecord> {
        self.entries.iter()
    }
}

impl std::fmt::Display for CommitLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
