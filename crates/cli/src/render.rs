//! Table rendering for task listings

use crate::input::format_date;
use tabled::{Table, Tabled};
use taskflow_core::domain::{Task, TaskStatus};

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Assignee")]
    assignee: u64,
    #[tabled(rename = "Creator")]
    creator: u64,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Completed")]
    completed: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            status: format!("{} {}", status_marker(task.status), task.status),
            assignee: task.assignee_id,
            creator: task.creator_id,
            due: format_date(task.due_at),
            completed: task
                .completed_at
                .map(format_date)
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

fn status_marker(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "[ ]",
        TaskStatus::InProgress => "[~]",
        TaskStatus::Completed => "[x]",
    }
}

pub fn task_table(tasks: &[Task]) -> String {
    Table::new(tasks.iter().map(TaskRow::from)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskflow_core::domain::TaskDraft;

    #[test]
    fn test_table_lists_every_task() {
        let mut done = Task::from_draft(
            TaskDraft::new("Ship it", "Tag and publish", 7, 3),
            1_709_251_200_000,
        );
        done.id = 1;
        done.transition_to(TaskStatus::Completed, 1_709_251_200_000);
        let mut open = Task::from_draft(TaskDraft::new("Review", "d", 9, 3), 1_709_251_200_000);
        open.id = 2;

        let table = task_table(&[done, open]);

        assert!(table.contains("Ship it"));
        assert!(table.contains("Description"));
        assert!(table.contains("Tag and publish"));
        assert!(table.contains("[x] COMPLETED"));
        assert!(table.contains("[ ] PENDING"));
        assert!(table.contains("01/03/2024"));
    }
}
