//! Parsing of raw console input

use chrono::{DateTime, NaiveDate};
use taskflow_core::domain::{TaskId, TaskStatus, UserId};
use taskflow_core::error::AppError;

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateTask,
    ListMyTasks,
    ListAllTasks,
    UpdateStatus,
    AssignTask,
    TestNotification,
    ChangeUser,
    Exit,
}

pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::CreateTask),
        "2" => Some(MenuChoice::ListMyTasks),
        "3" => Some(MenuChoice::ListAllTasks),
        "4" => Some(MenuChoice::UpdateStatus),
        "5" => Some(MenuChoice::AssignTask),
        "6" => Some(MenuChoice::TestNotification),
        "7" => Some(MenuChoice::ChangeUser),
        "8" => Some(MenuChoice::Exit),
        _ => None,
    }
}

pub fn parse_user_id(input: &str) -> Result<UserId, AppError> {
    input
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid user id: '{}'", input.trim())))
}

pub fn parse_task_id(input: &str) -> Result<TaskId, AppError> {
    input
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid task id: '{}'", input.trim())))
}

/// Status sub-menu: 1 pending, 2 in progress, 3 completed
pub fn parse_status_option(input: &str) -> Result<TaskStatus, AppError> {
    match input.trim() {
        "1" => Ok(TaskStatus::Pending),
        "2" => Ok(TaskStatus::InProgress),
        "3" => Ok(TaskStatus::Completed),
        other => Err(AppError::Validation(format!("invalid status option: '{}'", other))),
    }
}

/// Notification sub-menu: 1 direct, 2 push; anything else is passed through
/// as a raw kind tag and validated by the notification service.
pub fn kind_tag(input: &str) -> &str {
    match input.trim() {
        "1" => "direct",
        "2" => "push",
        other => other,
    }
}

/// Parse a `dd/mm/yyyy` due date into epoch ms (midnight UTC).
///
/// `None` means "use the default due date".
pub fn parse_due_date(input: &str) -> Option<i64> {
    let date = NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}

pub fn format_date(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}
