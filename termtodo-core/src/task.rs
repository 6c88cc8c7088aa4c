//! Task record and identifier types.

use std::str::FromStr;

use uuid::Uuid;

/// Unique identifier for a task, based on UUID v7.
///
/// UUID v7 carries a millisecond timestamp plus a counter and random bits,
/// so ids minted in the same millisecond never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A single to-do entry.
///
/// `id` and `text` are fixed at creation. Only the store can flip
/// `completed`, so the fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
}

impl Task {
    /// Builds an incomplete task from already-trimmed, non-empty text.
    pub(crate) const fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// The task's identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// The task's text, trimmed at creation.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the task has been marked done.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// An incomplete task is "active".
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.completed
    }

    pub(crate) const fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
