// Notification message texts

use crate::domain::TaskStatus;

/// Sent to the assignee when a task is created for them
pub fn task_created(title: &str) -> String {
    format!("New task assigned: {}", title)
}

/// Sent to the creator on every status transition
pub fn status_changed(title: &str, old_status: TaskStatus, new_status: TaskStatus) -> String {
    format!(
        "Task '{}' status changed from {} to {}",
        title, old_status, new_status
    )
}

/// Sent to the assignee when the task reaches COMPLETED
pub fn task_completed(title: &str) -> String {
    format!("Congratulations! You completed the task: {}", title)
}

pub fn task_assigned(title: &str) -> String {
    format!("You have been assigned to the task: {}", title)
}

pub fn task_unassigned(title: &str) -> String {
    format!("You are no longer responsible for the task: {}", title)
}
