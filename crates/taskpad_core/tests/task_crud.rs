use taskpad_core::{Snapshot, StoreError, Task, TaskId, TaskRepository, TaskService};

/// Repository stub for exercising the in-memory operations without disk.
struct NullRepository;

impl TaskRepository for NullRepository {
    fn load(&self) -> Snapshot {
        Snapshot::default()
    }

    fn save(&self, _tasks: &[Task], _next_id: TaskId) -> bool {
        true
    }
}

fn new_service() -> TaskService<NullRepository> {
    TaskService::new(NullRepository)
}

#[test]
fn add_task_assigns_sequential_ids_from_one() {
    let mut service = new_service();

    assert_eq!(service.add_task("first").id(), 1);
    assert_eq!(service.add_task("second").id(), 2);
    assert_eq!(service.add_task("third").id(), 3);
    assert_eq!(service.next_id(), 4);
}

#[test]
fn ids_stay_monotonic_across_deletions() {
    let mut service = new_service();
    service.add_task("a");
    service.add_task("b");
    service.delete_task(1).unwrap();
    service.delete_task(2).unwrap();

    // The counter never rewinds: the next id is 3, not 1.
    assert_eq!(service.add_task("c").id(), 3);
    assert_eq!(service.task_count(), 1);
}

#[test]
fn no_two_held_tasks_share_an_id() {
    let mut service = new_service();
    for n in 0..10 {
        service.add_task(format!("task {n}"));
    }
    service.delete_task(4).unwrap();
    service.add_task("replacement");

    let mut ids: Vec<TaskId> = service.list_all().iter().map(Task::id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), service.task_count());
}

#[test]
fn find_returns_the_matching_task() {
    let mut service = new_service();
    service.add_task("look at me");

    let task = service.find(1).unwrap();
    assert_eq!(task.description(), "look at me");
}

#[test]
fn find_unknown_id_reports_not_found() {
    let service = new_service();
    assert_eq!(service.find(99).unwrap_err(), StoreError::NotFound(99));
}

#[test]
fn mark_completed_flips_the_flag_and_returns_the_task() {
    let mut service = new_service();
    service.add_task("finish report");

    let task = service.mark_completed(1).unwrap();
    assert!(task.is_completed());

    // The change is visible on later lookups, not just the returned value.
    assert!(service.find(1).unwrap().is_completed());
}

#[test]
fn mark_completed_unknown_id_reports_not_found() {
    let mut service = new_service();
    assert_eq!(
        service.mark_completed(99).unwrap_err(),
        StoreError::NotFound(99)
    );
}

#[test]
fn delete_removes_the_task_and_later_lookups_fail() {
    let mut service = new_service();
    service.add_task("short-lived");
    service.add_task("survivor");

    service.delete_task(1).unwrap();

    assert_eq!(service.find(1).unwrap_err(), StoreError::NotFound(1));
    assert_eq!(
        service.mark_completed(1).unwrap_err(),
        StoreError::NotFound(1)
    );
    assert_eq!(service.delete_task(1).unwrap_err(), StoreError::NotFound(1));
    assert!(service.find(2).is_ok());
}

#[test]
fn list_all_preserves_insertion_order() {
    let mut service = new_service();
    service.add_task("one");
    service.add_task("two");
    service.add_task("three");

    let listed = service.list_all();
    assert_eq!(listed[0].description(), "one");
    assert_eq!(listed[1].description(), "two");
    assert_eq!(listed[2].description(), "three");
}

#[test]
fn filtered_lists_partition_the_store() {
    let mut service = new_service();
    for n in 1..=6 {
        service.add_task(format!("task {n}"));
    }
    service.mark_completed(2).unwrap();
    service.mark_completed(5).unwrap();

    let pending = service.list_filtered(|task| !task.is_completed());
    let completed = service.list_filtered(Task::is_completed);
    let all = service.list_all();

    assert_eq!(pending.len() + completed.len(), all.len());
    let pending_ids: Vec<TaskId> = pending.iter().map(Task::id).collect();
    let completed_ids: Vec<TaskId> = completed.iter().map(Task::id).collect();
    assert_eq!(pending_ids, vec![1, 3, 4, 6]);
    assert_eq!(completed_ids, vec![2, 5]);
    assert!(pending_ids.iter().all(|id| !completed_ids.contains(id)));
}

#[test]
fn listed_snapshots_are_independent_copies() {
    let mut service = new_service();
    service.add_task("stay pending");

    let mut copy = service.list_all();
    copy[0].mark_completed();
    copy.clear();

    // Mutating the snapshot must not touch the store's own state.
    assert_eq!(service.task_count(), 1);
    assert!(!service.find(1).unwrap().is_completed());
}
