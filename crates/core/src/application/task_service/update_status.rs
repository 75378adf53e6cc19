// Update Status Use Case

use crate::application::ChangePublisher;
use crate::domain::{Task, TaskId, TaskStatus};
use crate::error::Result;
use crate::port::{TaskRepository, TimeProvider};
use tokio::sync::Mutex;
use tracing::info;

/// Execute status update use case
///
/// Loads the task (`TaskNotFound` if absent, store untouched), applies the
/// transition, persists, then publishes the change with the prior status.
/// `mutation_lock` is held from load to update and released before publishing.
pub async fn execute(
    task_repo: &dyn TaskRepository,
    publisher: &ChangePublisher,
    time_provider: &dyn TimeProvider,
    mutation_lock: &Mutex<()>,
    task_id: TaskId,
    status: TaskStatus,
) -> Result<Task> {
    let (updated, old_status) = {
        let _guard = mutation_lock.lock().await;
        let mut task = super::load(task_repo, task_id).await?;

        let old_status = task.transition_to(status, time_provider.now_millis());
        (task_repo.update(task).await?, old_status)
    };

    info!(
        task_id = updated.id,
        from = %old_status,
        to = %updated.status,
        "Task status updated"
    );

    publisher.publish_status_changed(&updated, old_status).await?;

    Ok(updated)
}
