use std::cell::Cell;
use std::rc::Rc;
use taskboard_core::{
    AutoConfirm, MemorySnapshotStore, TaskController, TaskFilter, TaskStats, TaskStore,
};

fn fresh_controller() -> TaskController<MemorySnapshotStore> {
    TaskController::new(TaskStore::new(MemorySnapshotStore::new()))
}

fn counting_listener(controller: &mut TaskController<MemorySnapshotStore>) -> Rc<Cell<usize>> {
    let count = Rc::new(Cell::new(0));
    let hook = Rc::clone(&count);
    controller.subscribe(Box::new(move || hook.set(hook.get() + 1)));
    count
}

#[test]
fn add_task_trims_text_and_notifies() {
    let mut controller = fresh_controller();
    let notified = counting_listener(&mut controller);

    let task = controller.handle_add_task("  Buy milk  ").unwrap();
    assert_eq!(task.text, "Buy milk");
    assert!(!task.done);
    assert_eq!(notified.get(), 1);
}

#[test]
fn blank_text_is_rejected_without_notification() {
    let mut controller = fresh_controller();
    let notified = counting_listener(&mut controller);

    assert!(controller.handle_add_task("").is_none());
    assert!(controller.handle_add_task("   ").is_none());
    assert_eq!(controller.get_task_stats().total, 0);
    assert_eq!(notified.get(), 0);
}

#[test]
fn add_toggle_delete_stats_scenario() {
    let mut controller = fresh_controller();

    let task = controller.handle_add_task("Buy milk").unwrap();
    assert_eq!(
        controller.get_task_stats(),
        TaskStats {
            total: 1,
            completed: 0,
            remaining: 1
        }
    );

    controller.handle_toggle_task(task.id).unwrap();
    assert_eq!(
        controller.get_task_stats(),
        TaskStats {
            total: 1,
            completed: 1,
            remaining: 0
        }
    );

    controller.handle_delete_task(task.id);
    assert_eq!(
        controller.get_task_stats(),
        TaskStats {
            total: 0,
            completed: 0,
            remaining: 0
        }
    );
}

#[test]
fn toggle_twice_restores_done_state() {
    let mut controller = fresh_controller();
    let task = controller.handle_add_task("x").unwrap();

    let toggled = controller.handle_toggle_task(task.id).unwrap();
    assert!(toggled.done);
    let restored = controller.handle_toggle_task(task.id).unwrap();
    assert!(!restored.done);
}

#[test]
fn delete_notifies_even_for_absent_ids_but_toggle_does_not() {
    let mut controller = fresh_controller();
    let notified = counting_listener(&mut controller);

    controller.handle_delete_task(999);
    assert_eq!(notified.get(), 1);

    assert!(controller.handle_toggle_task(999).is_none());
    assert_eq!(notified.get(), 1);
}

#[test]
fn listeners_fire_in_registration_order() {
    let mut controller = fresh_controller();
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));

    for tag in ["first", "second", "third"] {
        let hook = Rc::clone(&order);
        controller.subscribe(Box::new(move || hook.borrow_mut().push(tag)));
    }

    controller.handle_add_task("x").unwrap();
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn active_and_completed_filters_partition_all_tasks() {
    let mut controller = fresh_controller();
    for text in ["a", "b", "c", "d"] {
        controller.handle_add_task(text).unwrap();
    }
    controller.handle_toggle_task(2).unwrap();
    controller.handle_toggle_task(4).unwrap();

    let active = controller.get_filtered_tasks(TaskFilter::Active);
    let completed = controller.get_filtered_tasks(TaskFilter::Completed);
    let all = controller.get_all_tasks();

    assert_eq!(active.len() + completed.len(), all.len());
    assert!(active.iter().all(|task| !task.done));
    assert!(completed.iter().all(|task| task.done));

    let mut ids: Vec<_> = active
        .iter()
        .chain(completed.iter())
        .map(|task| task.id)
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn unknown_filter_names_behave_as_all() {
    let mut controller = fresh_controller();
    controller.handle_add_task("a").unwrap();
    controller.handle_toggle_task(1).unwrap();
    controller.handle_add_task("b").unwrap();

    let via_unknown = controller.get_filtered_tasks(TaskFilter::parse("nonsense"));
    assert_eq!(via_unknown, controller.get_all_tasks());
}

#[test]
fn clear_all_respects_the_confirmation_boundary() {
    let mut controller = fresh_controller();
    controller.handle_add_task("a").unwrap();
    let notified = counting_listener(&mut controller);

    assert!(!controller.handle_clear_all_tasks(&AutoConfirm(false)));
    assert_eq!(controller.get_task_stats().total, 1);
    assert_eq!(notified.get(), 0);

    assert!(controller.handle_clear_all_tasks(&AutoConfirm(true)));
    assert_eq!(controller.get_task_stats().total, 0);
    assert_eq!(notified.get(), 1);
}
