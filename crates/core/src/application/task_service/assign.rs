// Assign Task Use Case

use crate::application::ChangePublisher;
use crate::domain::{Task, TaskId, UserId};
use crate::error::Result;
use crate::port::TaskRepository;
use tokio::sync::Mutex;
use tracing::info;

/// Execute reassignment use case
///
/// The publish always happens, even when the assignee did not change;
/// listeners decide whether that is worth a notification.
pub async fn execute(
    task_repo: &dyn TaskRepository,
    publisher: &ChangePublisher,
    mutation_lock: &Mutex<()>,
    task_id: TaskId,
    assignee_id: UserId,
) -> Result<Task> {
    let (updated, previous_assignee) = {
        let _guard = mutation_lock.lock().await;
        let mut task = super::load(task_repo, task_id).await?;

        let previous_assignee = task.reassign(assignee_id);
        (task_repo.update(task).await?, previous_assignee)
    };

    info!(
        task_id = updated.id,
        from = previous_assignee,
        to = updated.assignee_id,
        "Task reassigned"
    );

    publisher
        .publish_assigned(&updated, Some(previous_assignee))
        .await?;

    Ok(updated)
}
