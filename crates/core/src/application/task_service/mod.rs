// Task Service - the single entry point for task mutations

pub mod assign;
pub mod create;
pub mod update_status;


use crate::application::ChangePublisher;
use crate::domain::{Task, TaskDraft, TaskId, TaskStatus, UserId};
use crate::error::{AppError, Result};
use crate::port::{NotificationChannel, TaskRepository, TimeProvider};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Task orchestrator.
///
/// Every mutation goes store first, notifications second: a task is only
/// announced once the repository has accepted it.
///
/// Load-modify-update sequences are serialised by `mutation_lock`, so two
/// concurrent changes to the same task cannot overwrite each other.
/// Listeners run after the lock is released.
pub struct TaskService {
    task_repo: Arc<dyn TaskRepository>,
    channel: Arc<dyn NotificationChannel>,
    publisher: Arc<ChangePublisher>,
    time_provider: Arc<dyn TimeProvider>,
    mutation_lock: Mutex<()>,
}

impl TaskService {
    pub fn new(
        task_repo: Arc<dyn TaskRepository>,
        channel: Arc<dyn NotificationChannel>,
        publisher: Arc<ChangePublisher>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            task_repo,
            channel,
            publisher,
            time_provider,
            mutation_lock: Mutex::new(()),
        }
    }

    /// Create a task and tell its assignee
    pub async fn create_task(&self, draft: TaskDraft) -> Result<Task> {
        create::execute(
            self.task_repo.as_ref(),
            self.channel.as_ref(),
            self.time_provider.as_ref(),
            draft,
        )
        .await
    }

    /// Move a task to `status` and publish the change
    pub async fn update_status(&self, task_id: TaskId, status: TaskStatus) -> Result<Task> {
        update_status::execute(
            self.task_repo.as_ref(),
            self.publisher.as_ref(),
            self.time_provider.as_ref(),
            &self.mutation_lock,
            task_id,
            status,
        )
        .await
    }

    /// Hand a task to `assignee_id` and publish the change
    pub async fn assign_task(&self, task_id: TaskId, assignee_id: UserId) -> Result<Task> {
        assign::execute(
            self.task_repo.as_ref(),
            self.publisher.as_ref(),
            &self.mutation_lock,
            task_id,
            assignee_id,
        )
        .await
    }

    pub async fn get_task(&self, task_id: TaskId) -> Result<Task> {
        load(self.task_repo.as_ref(), task_id).await
    }

    /// Tasks assigned to `user_id`, in creation order
    pub async fn get_user_tasks(&self, user_id: UserId) -> Result<Vec<Task>> {
        self.task_repo.list_by_assignee(user_id).await
    }

    pub async fn get_all_tasks(&self) -> Result<Vec<Task>> {
        self.task_repo.list_all().await
    }
}

/// Fetch a task or fail with `TaskNotFound`
pub(crate) async fn load(task_repo: &dyn TaskRepository, task_id: TaskId) -> Result<Task> {
    task_repo
        .get_by_id(task_id)
        .await?
        .ok_or(AppError::TaskNotFound(task_id))
}
