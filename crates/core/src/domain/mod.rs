// Domain Layer - Pure business logic and entities

pub mod error;
pub mod notification;
pub mod task;

// Re-exports
pub use error::DomainError;
pub use notification::{DeliveryReceipt, NotificationKind};
pub use task::{
    Task, TaskDraft, TaskId, TaskStatus, UserId, DEFAULT_DUE_OFFSET_MS, UNSAVED_TASK_ID,
};
