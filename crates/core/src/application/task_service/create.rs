// Create Task Use Case

use crate::application::messages;
use crate::domain::{Task, TaskDraft};
use crate::error::Result;
use crate::port::{NotificationChannel, TaskRepository, TimeProvider};
use tracing::info;

/// Execute create use case
///
/// # Arguments
///
/// * `task_repo` - Task repository (assigns the id)
/// * `channel` - Channel for the one-shot "new task" message
/// * `time_provider` - Time provider (injected for determinism)
/// * `draft` - Creation request
///
/// The assignee is notified directly, not through the ChangePublisher.
pub async fn execute(
    task_repo: &dyn TaskRepository,
    channel: &dyn NotificationChannel,
    time_provider: &dyn TimeProvider,
    draft: TaskDraft,
) -> Result<Task> {
    draft.validate()?;

    let task = Task::from_draft(draft, time_provider.now_millis());
    let created = task_repo.add(task).await?;

    info!(
        task_id = created.id,
        assignee_id = created.assignee_id,
        creator_id = created.creator_id,
        "Task created"
    );

    channel
        .send(&messages::task_created(&created.title), created.assignee_id)
        .await?;

    Ok(created)
}
