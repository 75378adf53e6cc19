// Notification Listener - turns task events into notifications

use crate::application::messages;
use crate::domain::{Task, TaskStatus, UserId};
use crate::error::Result;
use crate::port::{NotificationChannel, TaskListener};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Listener that notifies the people affected by a task change.
///
/// Status change: the creator always hears about it, then the assignee is
/// congratulated when the task reached `Completed`.
/// Reassignment: the new assignee is told first, then the previous one (if
/// there was one). Reassigning to the same user sends nothing.
pub struct NotificationListener {
    channel: Arc<dyn NotificationChannel>,
}

impl NotificationListener {
    pub fn new(channel: Arc<dyn NotificationChannel>) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl TaskListener for NotificationListener {
    fn name(&self) -> &str {
        "notification"
    }

    async fn on_status_changed(&self, task: &Task, old_status: TaskStatus) -> Result<()> {
        let message = messages::status_changed(&task.title, old_status, task.status);
        self.channel.send(&message, task.creator_id).await?;

        if task.is_completed() {
            self.channel
                .send(&messages::task_completed(&task.title), task.assignee_id)
                .await?;
        }
        Ok(())
    }

    async fn on_assigned(&self, task: &Task, previous_assignee: Option<UserId>) -> Result<()> {
        if previous_assignee == Some(task.assignee_id) {
            debug!(
                task_id = task.id,
                assignee_id = task.assignee_id,
                "Reassigned to the same user, nothing to notify"
            );
            return Ok(());
        }

        self.channel
            .send(&messages::task_assigned(&task.title), task.assignee_id)
            .await?;

        if let Some(previous) = previous_assignee {
            self.channel
                .send(&messages::task_unassigned(&task.title), previous)
                .await?;
        }
        Ok(())
    }
}
