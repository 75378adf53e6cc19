//! Task lifecycle end-to-end tests
//!
//! Create -> status transitions -> reassignment through the real in-memory store.

use taskflow_core::domain::{TaskDraft, TaskStatus, DEFAULT_DUE_OFFSET_MS};
use taskflow_core::error::AppError;
use taskflow_core::port::TaskRepository;
use taskflow_integration_tests::{TestApp, START_MILLIS};
use tokio_test::{assert_err, assert_ok};

/// Scenario: create, complete, then hand over to another user
#[tokio::test]
async fn test_create_complete_reassign_scenario() {
    let app = TestApp::new();
    let due = START_MILLIS + DEFAULT_DUE_OFFSET_MS;

    // Create {title="Write spec", assignee=7, creator=3, due=+7d}
    let draft = TaskDraft::new("Write spec", "First draft", 7, 3).with_due_at(due);
    let task = assert_ok!(app.tasks.create_task(draft).await);
    assert_eq!(task.id, 1);
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.due_at, due);
    assert_eq!(app.direct.recipients(), vec![7]);
    app.direct.clear();

    // Complete: creator informed, then assignee congratulated
    app.clock.advance(60_000);
    let task = assert_ok!(app.tasks.update_status(1, TaskStatus::Completed).await);
    assert_eq!(task.status, TaskStatus::Completed);
    assert_eq!(task.completed_at, Some(START_MILLIS + 60_000));
    assert_eq!(app.direct.recipients(), vec![3, 7]);
    app.direct.clear();

    // Reassign to 9: "assigned" to 9, then "unassigned" to 7
    let task = assert_ok!(app.tasks.assign_task(1, 9).await);
    assert_eq!(task.assignee_id, 9);
    let sent = app.direct.sent();
    assert_eq!(app.direct.recipients(), vec![9, 7]);
    assert_eq!(sent[0].message, "You have been assigned to the task: Write spec");
    assert_eq!(
        sent[1].message,
        "You are no longer responsible for the task: Write spec"
    );

    // The store holds the final state
    let stored = assert_ok!(app.repo.get_by_id(1).await).unwrap();
    assert_eq!(stored, task);
}

/// Every created task gets a fresh id and starts Pending
#[tokio::test]
async fn test_created_ids_are_unique_and_pending() {
    let app = TestApp::new();

    let mut ids = Vec::new();
    for i in 0..10 {
        let draft = TaskDraft::new(format!("task {i}"), "desc", i % 3, 1);
        let task = assert_ok!(app.tasks.create_task(draft).await);
        assert_eq!(task.status, TaskStatus::Pending);
        ids.push(task.id);
    }

    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
}

/// Moving to InProgress from Pending never stamps a completion time
#[tokio::test]
async fn test_in_progress_leaves_completed_at_unset() {
    let app = TestApp::new();
    assert_ok!(app.tasks.create_task(TaskDraft::new("t", "d", 2, 1)).await);

    let task = assert_ok!(app.tasks.update_status(1, TaskStatus::InProgress).await);
    assert!(task.completed_at.is_none());

    let task = assert_ok!(app.tasks.update_status(1, TaskStatus::Pending).await);
    assert!(task.completed_at.is_none());
}

/// Completion timestamp is sticky: reopening a task keeps it.
/// Flagged on purpose so a change of policy shows up here.
#[tokio::test]
async fn test_reopened_task_keeps_completed_at() {
    let app = TestApp::new();
    assert_ok!(app.tasks.create_task(TaskDraft::new("t", "d", 2, 1)).await);
    let done = assert_ok!(app.tasks.update_status(1, TaskStatus::Completed).await);

    app.clock.advance(1_000);
    let reopened = assert_ok!(app.tasks.update_status(1, TaskStatus::InProgress).await);

    assert_eq!(reopened.status, TaskStatus::InProgress);
    assert_eq!(reopened.completed_at, done.completed_at);
}

/// Unknown id: error, store unchanged, nothing published
#[tokio::test]
async fn test_update_status_unknown_id_leaves_store_untouched() {
    let app = TestApp::new();
    assert_ok!(app.tasks.create_task(TaskDraft::new("t", "d", 2, 1)).await);
    let before = assert_ok!(app.tasks.get_all_tasks().await);
    app.direct.clear();

    let err = assert_err!(app.tasks.update_status(99, TaskStatus::Completed).await);
    assert!(matches!(err, AppError::TaskNotFound(99)));

    let err = assert_err!(app.tasks.assign_task(99, 4).await);
    assert!(matches!(err, AppError::TaskNotFound(99)));

    assert_eq!(assert_ok!(app.tasks.get_all_tasks().await), before);
    assert_eq!(app.direct.count(), 0);
}

/// Blank input never reaches the store
#[tokio::test]
async fn test_create_task_validation_error() {
    let app = TestApp::new();

    let err = assert_err!(app.tasks.create_task(TaskDraft::new("ok", "  ", 2, 1)).await);

    assert!(matches!(err, AppError::Validation(_)));
    assert!(app.repo.is_empty().await);
    assert_eq!(app.direct.count(), 0);
}

/// User listings only contain that user's tasks, in creation order
#[tokio::test]
async fn test_get_user_tasks_filters_by_assignee() {
    let app = TestApp::new();
    for (title, assignee) in [("a", 5), ("b", 6), ("c", 5), ("d", 6), ("e", 5)] {
        assert_ok!(app.tasks.create_task(TaskDraft::new(title, "d", assignee, 1)).await);
    }

    let mine = assert_ok!(app.tasks.get_user_tasks(5).await);
    let titles: Vec<_> = mine.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "c", "e"]);

    // Reassigning moves a task between listings without reordering the rest
    assert_ok!(app.tasks.assign_task(2, 5).await);
    let mine = assert_ok!(app.tasks.get_user_tasks(5).await);
    let ids: Vec<_> = mine.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 5]);

    assert_eq!(assert_ok!(app.tasks.get_all_tasks().await).len(), 5);
}
