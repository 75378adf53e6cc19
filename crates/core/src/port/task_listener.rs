// Task Listener Port
// Reactors to task mutations, driven by the ChangePublisher

use crate::domain::{Task, TaskStatus, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Listener invoked after a task mutation has been persisted.
///
/// Handlers receive the stored task plus the relevant prior state. An error
/// returned here stops the publish call it belongs to.
#[async_trait]
pub trait TaskListener: Send + Sync {
    /// Name used in logs and in `AppError::Listener`
    fn name(&self) -> &str;

    /// Status moved from `old_status` to `task.status`
    async fn on_status_changed(&self, task: &Task, old_status: TaskStatus) -> Result<()>;

    /// Assignee changed to `task.assignee_id`
    ///
    /// `previous_assignee` is `None` when the task had no owner before.
    async fn on_assigned(&self, task: &Task, previous_assignee: Option<UserId>) -> Result<()>;
}
