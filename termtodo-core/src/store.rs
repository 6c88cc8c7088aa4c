//! Ordered in-memory task collection plus the active filter.
//!
//! `TaskStore` is the only mutator of the task list. Invalid input (blank
//! text, unknown ids, redundant calls) is a silent no-op rather than an
//! error; return values only report what happened so callers can adjust
//! view state such as selection.

use crate::filter::FilterMode;
use crate::task::{Task, TaskId};

/// Owns the task list in insertion order and the current filter.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: FilterMode,
}

impl TaskStore {
    /// Creates an empty store showing all tasks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given initial filter.
    #[must_use]
    pub const fn with_filter(filter: FilterMode) -> Self {
        Self {
            tasks: Vec::new(),
            filter,
        }
    }

    /// Appends a new incomplete task.
    ///
    /// The text is trimmed first; if nothing is left the call is a no-op
    /// and returns `None`.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = TaskId::new();
        self.tasks.push(Task::new(id, text.to_string()));
        Some(id)
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// Returns `false` (and changes nothing) if no such task exists.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id() == id) {
            Some(task) => {
                task.toggle();
                true
            }
            None => false,
        }
    }

    /// Removes the task with `id`, keeping the order of the rest.
    ///
    /// Returns `false` (and changes nothing) if no such task exists.
    pub fn delete(&mut self, id: TaskId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.tasks.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Removes every completed task, keeping the order of the rest.
    ///
    /// Returns the number of tasks removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(Task::is_active);
        before - self.tasks.len()
    }

    /// Replaces the active filter. The collection is untouched.
    pub const fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
    }

    /// The active filter.
    #[must_use]
    pub const fn filter(&self) -> FilterMode {
        self.filter
    }

    /// Tasks matching the active filter, in insertion order.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        let filter = self.filter;
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Number of incomplete tasks, regardless of the filter.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_active()).count()
    }

    /// Whether at least one task is completed.
    #[must_use]
    pub fn has_completed(&self) -> bool {
        self.tasks.iter().any(Task::is_completed)
    }

    /// All tasks in insertion order, ignoring the filter.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Total number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == id)
    }
}
