// Task Repository Port (Interface)

use crate::domain::{Task, TaskId, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Task persistence.
///
/// Implementations own the canonical copy of every task and hand out clones.
/// `add` and `update` must be serialised against readers: ids are never
/// reused and no update is lost.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Assign a fresh id, store the task and return the stored value
    async fn add(&self, task: Task) -> Result<Task>;

    /// Find task by ID (`None` when absent)
    async fn get_by_id(&self, id: TaskId) -> Result<Option<Task>>;

    /// Replace the record with the same id
    ///
    /// # Errors
    /// - AppError::TaskNotFound if no record has this id (never inserts)
    async fn update(&self, task: Task) -> Result<Task>;

    /// Snapshot of tasks assigned to `user_id`, in insertion order
    async fn list_by_assignee(&self, user_id: UserId) -> Result<Vec<Task>>;

    /// Snapshot of every task, in insertion order
    async fn list_all(&self) -> Result<Vec<Task>>;
}
