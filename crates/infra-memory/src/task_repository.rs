// In-Memory TaskRepository Implementation

use async_trait::async_trait;
use taskflow_core::domain::{Task, TaskId, UserId};
use taskflow_core::error::{AppError, Result};
use taskflow_core::port::TaskRepository;
use tokio::sync::RwLock;
use tracing::debug;

/// First id handed out by a fresh store
const FIRST_TASK_ID: TaskId = 1;

/// Task store backed by a vector scanned linearly.
///
/// One lock guards both the tasks and the id counter, so `add`/`update`
/// are serialised against readers: ids are never reused and no update is
/// lost. Records keep their insertion position when updated.
pub struct InMemoryTaskRepository {
    state: RwLock<StoreState>,
}

struct StoreState {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                tasks: Vec::new(),
                next_id: FIRST_TASK_ID,
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.tasks.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.tasks.is_empty()
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn add(&self, mut task: Task) -> Result<Task> {
        let mut state = self.state.write().await;

        task.id = state.next_id;
        state.next_id += 1;
        state.tasks.push(task.clone());

        debug!(task_id = task.id, "Task stored");
        Ok(task)
    }

    async fn get_by_id(&self, id: TaskId) -> Result<Option<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn update(&self, task: Task) -> Result<Task> {
        let mut state = self.state.write().await;

        let slot = state
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or(AppError::TaskNotFound(task.id))?;
        *slot = task.clone();

        debug!(task_id = task.id, status = %task.status, "Task replaced");
        Ok(task)
    }

    async fn list_by_assignee(&self, user_id: UserId) -> Result<Vec<Task>> {
        let state = self.state.read().await;
        Ok(state
            .tasks
            .iter()
            .filter(|t| t.assignee_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Task>> {
        Ok(self.state.read().await.tasks.clone())
    }
}
