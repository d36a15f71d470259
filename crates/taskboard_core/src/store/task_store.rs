//! Task collection store with best-effort snapshot persistence.
//!
//! # Responsibility
//! - Own the ordered task collection and assign task ids.
//! - Snapshot the full collection after every state-changing mutation.
//!
//! # Invariants
//! - Ids are unique; the next id is `max existing + 1`, or 1 when empty.
//! - A failed snapshot load (missing key or malformed payload) yields an
//!   empty collection and is never surfaced to callers.

use crate::model::task::{Task, TaskId};
use crate::store::snapshot::SnapshotStore;
use log::{info, warn};

/// Fixed key the task collection is snapshotted under.
pub const TASKS_SNAPSHOT_KEY: &str = "tasks.v1";

/// Ordered task collection backed by a snapshot store.
pub struct TaskStore<S: SnapshotStore> {
    tasks: Vec<Task>,
    snapshot: S,
}

impl<S: SnapshotStore> TaskStore<S> {
    /// Creates a store, restoring any collection previously snapshotted
    /// into `snapshot`. Absent or unreadable snapshots yield an empty store.
    pub fn new(snapshot: S) -> Self {
        let tasks = load_tasks(&snapshot);
        Self { tasks, snapshot }
    }

    /// Creates a task with a fresh id, appends it, persists, and returns
    /// a copy of the created record.
    pub fn add_task(&mut self, text: impl Into<String>) -> Task {
        let task = Task::new(self.next_id(), text);
        info!(
            "event=task_add module=task_store status=ok id={} total={}",
            task.id,
            self.tasks.len() + 1
        );
        self.tasks.push(task.clone());
        self.persist();
        task
    }

    /// Removes the task with `id` if present. Absent ids are a no-op.
    pub fn remove_task(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() != before {
            info!("event=task_remove module=task_store status=ok id={id}");
        }
        self.persist();
    }

    /// Flips the completion flag of the task with `id`, persists, and
    /// returns a copy of the updated record. Absent ids return `None`
    /// without touching the snapshot.
    pub fn toggle_task(&mut self, id: TaskId) -> Option<Task> {
        let updated = self.tasks.iter_mut().find(|task| task.id == id).map(|task| {
            task.toggle_done();
            task.clone()
        })?;
        info!(
            "event=task_toggle module=task_store status=ok id={id} done={}",
            updated.done
        );
        self.persist();
        Some(updated)
    }

    /// Returns the task with `id`, if present.
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Returns a defensive copy of the collection in insertion order.
    pub fn get_all_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Total number of tasks.
    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of completed tasks.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.done).count()
    }

    /// Number of not-yet-completed tasks.
    pub fn remaining_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.done).count()
    }

    /// Empties the collection and persists the empty snapshot.
    pub fn clear_all(&mut self) {
        info!(
            "event=task_clear module=task_store status=ok removed={}",
            self.tasks.len()
        );
        self.tasks.clear();
        self.persist();
    }

    fn next_id(&self) -> TaskId {
        self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
    }

    /// Best-effort full snapshot. Serialization of plain records cannot
    /// fail; backend write errors are logged and swallowed.
    fn persist(&mut self) {
        let payload = match serde_json::to_string(&self.tasks) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("event=snapshot_save module=task_store status=error error={err}");
                return;
            }
        };
        if let Err(err) = self.snapshot.save(TASKS_SNAPSHOT_KEY, &payload) {
            warn!("event=snapshot_save module=task_store status=error error={err}");
        }
    }
}

fn load_tasks<S: SnapshotStore>(snapshot: &S) -> Vec<Task> {
    let payload = match snapshot.load(TASKS_SNAPSHOT_KEY) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("event=snapshot_load module=task_store status=error error={err}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Task>>(&payload) {
        Ok(tasks) => {
            info!(
                "event=snapshot_load module=task_store status=ok count={}",
                tasks.len()
            );
            tasks
        }
        Err(err) => {
            // Malformed snapshots are treated as "no data" rather than
            // blocking startup.
            warn!("event=snapshot_load module=task_store status=corrupt error={err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskStore, TASKS_SNAPSHOT_KEY};
    use crate::store::snapshot::MemorySnapshotStore;

    #[test]
    fn ids_are_strictly_increasing_and_unique() {
        let mut store = TaskStore::new(MemorySnapshotStore::new());
        let a = store.add_task("a");
        let b = store.add_task("b");
        store.remove_task(a.id);
        let c = store.add_task("c");
        assert!(a.id < b.id && b.id < c.id);
    }

    #[test]
    fn next_id_restarts_from_max_plus_one() {
        let mut store = TaskStore::new(MemorySnapshotStore::new());
        store.add_task("a");
        store.add_task("b");
        store.remove_task(2);
        // Max remaining id is 1, so the next id is 2 again.
        assert_eq!(store.add_task("c").id, 2);
    }

    #[test]
    fn remove_of_absent_id_is_a_no_op() {
        let mut store = TaskStore::new(MemorySnapshotStore::new());
        store.add_task("a");
        store.remove_task(99);
        assert_eq!(store.total_count(), 1);
    }

    #[test]
    fn counts_track_the_done_flag() {
        let mut store = TaskStore::new(MemorySnapshotStore::new());
        let a = store.add_task("a");
        store.add_task("b");
        store.toggle_task(a.id).unwrap();

        assert_eq!(store.total_count(), 2);
        assert_eq!(store.completed_count(), 1);
        assert_eq!(store.remaining_count(), 1);
    }

    #[test]
    fn toggle_of_absent_id_returns_none() {
        let mut store = TaskStore::new(MemorySnapshotStore::new());
        assert!(store.toggle_task(1).is_none());
    }

    #[test]
    fn get_all_tasks_is_a_defensive_copy() {
        let mut store = TaskStore::new(MemorySnapshotStore::new());
        store.add_task("a");

        let mut copy = store.get_all_tasks();
        copy[0].text = "mutated".to_string();
        copy.clear();

        assert_eq!(store.get_task(1).unwrap().text, "a");
    }

    #[test]
    fn malformed_snapshot_payload_yields_empty_store() {
        let snapshot = MemorySnapshotStore::with_entry(TASKS_SNAPSHOT_KEY, "{not json");
        let store = TaskStore::new(snapshot);
        assert_eq!(store.total_count(), 0);
    }

    #[test]
    fn clear_all_empties_and_persists() {
        let mut store = TaskStore::new(MemorySnapshotStore::new());
        store.add_task("a");
        store.add_task("b");
        store.clear_all();
        assert_eq!(store.total_count(), 0);
        assert_eq!(store.get_all_tasks(), Vec::new());
    }
}
