//! Core domain logic for the taskboard demo.
//! This crate is the single source of truth for store and controller
//! contracts; presentation layers stay behind the controller boundary.

pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod store;

pub use controller::task_controller::{TaskController, TaskFilter, TaskStats};
pub use controller::user_controller::{UserController, UserStats};
pub use controller::{AutoConfirm, ConfirmPrompt, Listener};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId};
pub use model::user::{is_valid_email, User, UserId};
pub use store::snapshot::{
    MemorySnapshotStore, SnapshotError, SnapshotResult, SnapshotStore, SqliteSnapshotStore,
};
pub use store::task_store::{TaskStore, TASKS_SNAPSHOT_KEY};
pub use store::user_store::UserStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
