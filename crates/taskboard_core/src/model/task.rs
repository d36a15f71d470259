//! Task entity.
//!
//! # Responsibility
//! - Define the task record persisted in the snapshot wire format.
//! - Provide completion-state helpers used by the store mutators.
//!
//! # Invariants
//! - `id` is assigned by the owning store and never changes afterwards.
//! - `text` is validated non-blank by the controller before insertion.

use super::now_epoch_ms;
use serde::{Deserialize, Serialize};

/// Store-assigned task identifier, monotonic per store.
pub type TaskId = u64;

/// One to-do item owned by a `TaskStore`.
///
/// The serde shape doubles as the snapshot wire record
/// `{id, text, done, created_at_ms}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id, unique within the owning store.
    pub id: TaskId,
    /// Display text. Non-empty at creation time.
    pub text: String,
    /// Completion flag.
    pub done: bool,
    /// Creation time in unix epoch milliseconds.
    pub created_at_ms: i64,
}

impl Task {
    /// Creates a fresh, not-yet-done task. Called by the store factory only.
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
            created_at_ms: now_epoch_ms(),
        }
    }

    /// Flips the completion flag.
    pub fn toggle_done(&mut self) {
        self.done = !self.done;
    }

    /// Sets the completion flag.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Clears the completion flag.
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Returns whether this task is completed.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::Task;

    #[test]
    fn new_task_starts_undone_with_given_text() {
        let task = Task::new(7, "water plants");
        assert_eq!(task.id, 7);
        assert_eq!(task.text, "water plants");
        assert!(!task.is_done());
        assert!(task.created_at_ms >= 0);
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut task = Task::new(1, "x");
        task.toggle_done();
        assert!(task.is_done());
        task.toggle_done();
        assert!(!task.is_done());
    }

    #[test]
    fn mark_helpers_set_and_clear_done() {
        let mut task = Task::new(1, "x");
        task.mark_done();
        assert!(task.done);
        task.mark_undone();
        assert!(!task.done);
    }
}
