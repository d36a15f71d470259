//! Task controller.
//!
//! # Responsibility
//! - Validate task input and delegate mutations to the owned `TaskStore`.
//! - Notify subscribers after every successful mutation.
//!
//! # Invariants
//! - Blank task text never reaches the store.
//! - Delete always notifies; toggle notifies only when the id was found.
//!   The asymmetry is the given contract and pinned by tests.

use crate::controller::{ConfirmPrompt, Listener};
use crate::model::task::{Task, TaskId};
use crate::store::snapshot::SnapshotStore;
use crate::store::task_store::TaskStore;
use log::info;

const CLEAR_ALL_PROMPT: &str = "Are you sure you want to delete all tasks?";

/// Counts over the task collection's `done` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

/// Completion-state filter for task list views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    /// Parses a filter name. Unrecognized values fall back to `All`.
    pub fn parse(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::All,
        }
    }
}

/// Mediates between presentation callers and one `TaskStore`.
pub struct TaskController<S: SnapshotStore> {
    store: TaskStore<S>,
    listeners: Vec<Listener>,
}

impl<S: SnapshotStore> TaskController<S> {
    /// Creates a controller owning `store`.
    pub fn new(store: TaskStore<S>) -> Self {
        Self {
            store,
            listeners: Vec::new(),
        }
    }

    /// Registers a change listener. Listeners fire synchronously, in
    /// registration order, after every successful mutation.
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    fn notify_listeners(&mut self) {
        for listener in &mut self.listeners {
            listener();
        }
    }

    /// Adds a task from raw input. Returns `None` for absent/blank text
    /// without touching the store or notifying.
    pub fn handle_add_task(&mut self, text: &str) -> Option<Task> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            info!("event=task_add module=task_controller status=rejected reason=blank_text");
            return None;
        }

        let task = self.store.add_task(trimmed);
        self.notify_listeners();
        Some(task)
    }

    /// Deletes a task by id. Notifies regardless of whether a removal
    /// occurred (given contract).
    pub fn handle_delete_task(&mut self, id: TaskId) {
        self.store.remove_task(id);
        self.notify_listeners();
    }

    /// Toggles the completion flag of a task. Absent ids are a silent
    /// no-op with no notification.
    pub fn handle_toggle_task(&mut self, id: TaskId) -> Option<Task> {
        let task = self.store.toggle_task(id)?;
        self.notify_listeners();
        Some(task)
    }

    /// Clears the whole collection after host confirmation. Returns whether
    /// the clear was performed.
    pub fn handle_clear_all_tasks(&mut self, prompt: &dyn ConfirmPrompt) -> bool {
        if !prompt.confirm(CLEAR_ALL_PROMPT) {
            info!("event=task_clear module=task_controller status=cancelled");
            return false;
        }
        self.store.clear_all();
        self.notify_listeners();
        true
    }

    /// Returns a copy of the full collection in insertion order.
    pub fn get_all_tasks(&self) -> Vec<Task> {
        self.store.get_all_tasks()
    }

    /// Returns the current completion counts.
    pub fn get_task_stats(&self) -> TaskStats {
        TaskStats {
            total: self.store.total_count(),
            completed: self.store.completed_count(),
            remaining: self.store.remaining_count(),
        }
    }

    /// Returns tasks matching `filter`, in insertion order.
    pub fn get_filtered_tasks(&self, filter: TaskFilter) -> Vec<Task> {
        let tasks = self.store.get_all_tasks();
        match filter {
            TaskFilter::All => tasks,
            TaskFilter::Active => tasks.into_iter().filter(|task| !task.done).collect(),
            TaskFilter::Completed => tasks.into_iter().filter(|task| task.done).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TaskFilter;

    #[test]
    fn filter_parse_maps_known_names() {
        assert_eq!(TaskFilter::parse("active"), TaskFilter::Active);
        assert_eq!(TaskFilter::parse("completed"), TaskFilter::Completed);
        assert_eq!(TaskFilter::parse("all"), TaskFilter::All);
    }

    #[test]
    fn filter_parse_falls_back_to_all() {
        assert_eq!(TaskFilter::parse(""), TaskFilter::All);
        assert_eq!(TaskFilter::parse("Active"), TaskFilter::All);
        assert_eq!(TaskFilter::parse("done"), TaskFilter::All);
    }
}
