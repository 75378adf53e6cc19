// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("Unknown task status: {0}")]
    InvalidStatus(String),

    #[error("Unknown notification kind: {0}")]
    UnknownNotificationKind(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
