// Task Domain Model

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Task ID (assigned by the store, starts at 1)
pub type TaskId = u64;

/// User identifier (assignees and creators)
pub type UserId = u64;

/// Placeholder id carried by a task until the store assigns a real one
pub const UNSAVED_TASK_ID: TaskId = 0;

/// Due date offset applied when the caller gives none (7 days)
pub const DEFAULT_DUE_OFFSET_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Task Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_ascii_uppercase().replace('-', "_");
        match normalized.as_str() {
            "PENDING" => Ok(TaskStatus::Pending),
            "IN_PROGRESS" => Ok(TaskStatus::InProgress),
            "COMPLETED" => Ok(TaskStatus::Completed),
            _ => Err(DomainError::InvalidStatus(value.to_string())),
        }
    }
}

/// Creation request for a task.
///
/// `due_at` is optional; the service defaults it relative to the creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub assignee_id: UserId,
    pub creator_id: UserId,
    #[serde(default)]
    pub due_at: Option<i64>,
}

impl TaskDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        assignee_id: UserId,
        creator_id: UserId,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            assignee_id,
            creator_id,
            due_at: None,
        }
    }

    pub fn with_due_at(mut self, due_at: i64) -> Self {
        self.due_at = Some(due_at);
        self
    }

    /// Reject blank title or description
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::EmptyField("title"));
        }
        if self.description.trim().is_empty() {
            return Err(DomainError::EmptyField("description"));
        }
        Ok(())
    }
}

/// Task Entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,

    pub assignee_id: UserId,
    pub creator_id: UserId,

    pub due_at: i64,     // epoch ms
    pub created_at: i64, // epoch ms
    pub completed_at: Option<i64>,
}

impl Task {
    /// Build an unsaved task from a draft.
    ///
    /// # Arguments
    ///
    /// * `draft` - Validated creation request
    /// * `created_at` - Creation timestamp in epoch ms (injected, not system time)
    pub fn from_draft(draft: TaskDraft, created_at: i64) -> Self {
        let due_at = draft
            .due_at
            .unwrap_or(created_at + DEFAULT_DUE_OFFSET_MS);

        Self {
            id: UNSAVED_TASK_ID,
            title: draft.title,
            description: draft.description,
            status: TaskStatus::Pending,
            assignee_id: draft.assignee_id,
            creator_id: draft.creator_id,
            due_at,
            created_at,
            completed_at: None,
        }
    }

    /// Apply a status change and return the previous status.
    ///
    /// Entering `Completed` stamps `completed_at`. Leaving it does not clear
    /// the timestamp.
    pub fn transition_to(&mut self, status: TaskStatus, now_millis: i64) -> TaskStatus {
        let previous = self.status;
        self.status = status;
        if status == TaskStatus::Completed {
            self.completed_at = Some(now_millis);
        }
        previous
    }

    /// Hand the task to another user, returning the previous assignee
    pub fn reassign(&mut self, assignee_id: UserId) -> UserId {
        std::mem::replace(&mut self.assignee_id, assignee_id)
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}
