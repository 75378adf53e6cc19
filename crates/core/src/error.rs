// Central Error Type for the Application

use crate::domain::{DomainError, TaskId};
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Unsupported notification kind: {0}")]
    UnsupportedKind(String),

    #[error("Notification error: {0}")]
    Notification(String),

    /// A change listener failed; remaining listeners for that event were skipped
    #[error("Listener '{listener}' failed: {source}")]
    Listener {
        listener: String,
        #[source]
        source: Box<AppError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownNotificationKind(kind) => AppError::UnsupportedKind(kind),
            other => AppError::Validation(other.to_string()),
        }
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
