//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskboard_core` wiring end to
//!   end: store construction, controller mediation, notifications.
//! - Keep output deterministic for quick local sanity checks.

use taskboard_core::{
    core_version, AutoConfirm, MemorySnapshotStore, TaskController, TaskStore, UserController,
    UserStore,
};

fn main() {
    println!("taskboard_core version={}", core_version());

    let mut tasks = TaskController::new(TaskStore::new(MemorySnapshotStore::new()));
    tasks.subscribe(Box::new(|| println!("tasks changed")));

    let created = tasks.handle_add_task("try the demo");
    println!("added={:?}", created.map(|task| task.text));
    let stats = tasks.get_task_stats();
    println!(
        "tasks total={} completed={} remaining={}",
        stats.total, stats.completed, stats.remaining
    );
    let cleared = tasks.handle_clear_all_tasks(&AutoConfirm(true));
    println!("cleared={cleared}");

    let users = UserController::new(UserStore::new());
    let stats = users.get_user_stats();
    println!(
        "users total={} developers={} designers={} managers={}",
        stats.total, stats.developers, stats.designers, stats.managers
    );
    println!("roles={:?}", users.get_available_roles());
}
