//! Interactive main menu (read-eval-print loop)

use crate::input::{self, MenuChoice};
use crate::render;
use anyhow::{anyhow, Result};
use colored::Colorize;
use std::io::Write;
use std::sync::Arc;
use taskflow_core::application::{NotificationService, TaskService};
use taskflow_core::domain::{Task, TaskDraft, UserId, DEFAULT_DUE_OFFSET_MS};
use taskflow_core::port::TimeProvider;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

pub struct Menu<R> {
    tasks: TaskService,
    notifications: NotificationService,
    clock: Arc<dyn TimeProvider>,
    current_user: UserId,
    input: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> Menu<R> {
    pub fn new(
        tasks: TaskService,
        notifications: NotificationService,
        clock: Arc<dyn TimeProvider>,
        current_user: UserId,
        input: R,
    ) -> Self {
        Self {
            tasks,
            notifications,
            clock,
            current_user,
            input: input.lines(),
        }
    }

    /// Run until the user picks "Exit" or input ends
    pub async fn run(&mut self) -> Result<()> {
        println!("{}", "Collaborative Task Tracker".cyan().bold());

        loop {
            self.print_menu();
            let Some(line) = self.prompt("Choose an option (1-8): ").await? else {
                break;
            };

            match input::parse_menu_choice(&line) {
                Some(MenuChoice::Exit) => {
                    println!("Exiting...");
                    break;
                }
                Some(choice) => {
                    if let Err(e) = self.dispatch(choice).await {
                        println!("{}", format!("✗ {}", e).red());
                    }
                }
                None => println!("{}", "Invalid option".yellow()),
            }
        }
        Ok(())
    }

    fn print_menu(&self) {
        println!();
        println!("{}", "MAIN MENU".bold());
        println!("Current user: {}", self.current_user);
        println!("1. Create task");
        println!("2. List my tasks");
        println!("3. List all tasks");
        println!("4. Update task status");
        println!("5. Assign task to another user");
        println!("6. Test notifications");
        println!("7. Change current user");
        println!("8. Exit");
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::CreateTask => self.create_task().await,
            MenuChoice::ListMyTasks => self.list_my_tasks().await,
            MenuChoice::ListAllTasks => self.list_all_tasks().await,
            MenuChoice::UpdateStatus => self.update_status().await,
            MenuChoice::AssignTask => self.assign_task().await,
            MenuChoice::TestNotification => self.test_notification().await,
            MenuChoice::ChangeUser => self.change_user().await,
            MenuChoice::Exit => Ok(()),
        }
    }

    async fn create_task(&mut self) -> Result<()> {
        let title = self.field("Title: ").await?;
        let description = self.field("Description: ").await?;
        let assignee_id = input::parse_user_id(&self.field("Assignee id: ").await?)?;
        let due_input = self.field("Due date (dd/mm/yyyy): ").await?;

        let due_at = input::parse_due_date(&due_input).unwrap_or_else(|| {
            let fallback = self.clock.now_millis() + DEFAULT_DUE_OFFSET_MS;
            println!(
                "{}",
                format!(
                    "Invalid date, using {} instead",
                    input::format_date(fallback)
                )
                .yellow()
            );
            fallback
        });

        let draft =
            TaskDraft::new(title, description, assignee_id, self.current_user).with_due_at(due_at);
        let task = self.tasks.create_task(draft).await?;

        println!("{}", format!("✓ Task created with id {}", task.id).green());
        Ok(())
    }

    async fn list_my_tasks(&mut self) -> Result<()> {
        let tasks = self.my_tasks().await?;
        print_tasks(&tasks);
        Ok(())
    }

    /// Tasks assigned to the current user
    async fn my_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.get_user_tasks(self.current_user).await?)
    }

    async fn list_all_tasks(&mut self) -> Result<()> {
        let tasks = self.tasks.get_all_tasks().await?;
        print_tasks(&tasks);
        Ok(())
    }

    async fn update_status(&mut self) -> Result<()> {
        let task_id = input::parse_task_id(&self.field("Task id: ").await?)?;
        println!("1. Pending");
        println!("2. In progress");
        println!("3. Completed");
        let status = input::parse_status_option(&self.field("Option (1-3): ").await?)?;

        let task = self.tasks.update_status(task_id, status).await?;

        println!("{}", format!("✓ Status set to {}", task.status).green());
        Ok(())
    }

    async fn assign_task(&mut self) -> Result<()> {
        let task_id = input::parse_task_id(&self.field("Task id: ").await?)?;
        let assignee_id = input::parse_user_id(&self.field("New assignee id: ").await?)?;

        let task = self.tasks.assign_task(task_id, assignee_id).await?;

        println!(
            "{}",
            format!("✓ Task '{}' assigned to user {}", task.title, task.assignee_id).green()
        );
        Ok(())
    }

    async fn test_notification(&mut self) -> Result<()> {
        println!("1. Direct message");
        println!("2. Push alert");
        let kind = self.field("Option (1-2): ").await?;
        let user_id = input::parse_user_id(&self.field("Recipient user id: ").await?)?;
        let message = self.field("Message: ").await?;

        self.notifications
            .send_ad_hoc(input::kind_tag(&kind), user_id, &message)
            .await?;

        println!("{}", "✓ Notification sent".green());
        Ok(())
    }

    async fn change_user(&mut self) -> Result<()> {
        let line = self.field("New user id: ").await?;
        match input::parse_user_id(&line) {
            Ok(user_id) => {
                self.current_user = user_id;
                println!("{}", format!("✓ Current user is now {}", user_id).green());
            }
            Err(_) => println!("{}", "Invalid id, keeping current user".yellow()),
        }
        Ok(())
    }

    /// Print `label` and read one line (`None` on end of input)
    async fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        print!("{}", label);
        std::io::stdout().flush()?;
        Ok(self.input.next_line().await?)
    }

    /// Like `prompt`, but end of input is an error
    async fn field(&mut self, label: &str) -> Result<String> {
        self.prompt(label)
            .await?
            .ok_or_else(|| anyhow!("input closed"))
    }
}

fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
    } else {
        println!("{}", render::task_table(tasks));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskflow_core::application::{ChangePublisher, ChannelSelector, NotificationListener};
    use taskflow_core::domain::{NotificationKind, TaskStatus};
    use taskflow_core::port::notification_channel::mocks::RecordingChannel;
    use taskflow_core::port::time_provider::mocks::ManualTimeProvider;
    use taskflow_core::port::TaskRepository;
    use taskflow_infra_memory::InMemoryTaskRepository;
    use tokio_test::assert_ok;

    struct Session {
        repo: Arc<InMemoryTaskRepository>,
        direct: RecordingChannel,
        push: RecordingChannel,
        menu: Menu<&'static [u8]>,
    }

    async fn run_script(current_user: UserId, script: &'static str) -> Session {
        let repo = Arc::new(InMemoryTaskRepository::new());
        let direct = RecordingChannel::new(NotificationKind::Direct);
        let push = RecordingChannel::new(NotificationKind::Push);
        let clock = Arc::new(ManualTimeProvider::new(1_709_251_200_000));

        let publisher = Arc::new(ChangePublisher::new());
        publisher.subscribe(Arc::new(NotificationListener::new(Arc::new(direct.clone()))));
        let tasks = TaskService::new(
            repo.clone(),
            Arc::new(direct.clone()),
            publisher,
            clock.clone(),
        );
        let notifications = NotificationService::new(ChannelSelector::new(
            Arc::new(direct.clone()),
            Arc::new(push.clone()),
        ));

        let mut menu = Menu::new(tasks, notifications, clock, current_user, script.as_bytes());
        assert_ok!(menu.run().await);

        Session {
            repo,
            direct,
            push,
            menu,
        }
    }

    #[tokio::test]
    async fn test_session_creates_completes_and_reassigns() {
        let script = "1\nWrite spec\nDraft the doc\n7\n\n\
                      4\n1\n3\n\
                      5\n1\n9\n\
                      8\n";

        let session = run_script(3, script).await;

        let task = session.repo.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(task.creator_id, 3);
        assert_eq!(task.assignee_id, 9);
        assert_eq!(task.status, TaskStatus::Completed);
        assert!(task.completed_at.is_some());
        // created -> 7, completed -> 3 then 7, reassigned -> 9 then 7
        assert_eq!(session.direct.recipients(), vec![7, 3, 7, 9, 7]);
    }

    #[tokio::test]
    async fn test_errors_do_not_end_the_session() {
        // unknown task, bad status option, unknown kind, then a valid push
        let script = "4\n99\n3\n\
                      4\nabc\n\
                      6\n5\n4\nhello\n\
                      6\n2\n4\nhello\n";

        let session = run_script(1, script).await;

        assert!(session.repo.is_empty().await);
        assert_eq!(session.direct.count(), 0);
        assert_eq!(session.push.recipients(), vec![4]);
    }

    #[tokio::test]
    async fn test_explicit_due_date_and_user_switch() {
        let script = "1\nMine\nd\n2\n01/03/2024\n7\n2\n2\n8\n";

        let session = run_script(1, script).await;

        let task = session.repo.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(task.creator_id, 1);
        assert_eq!(task.due_at, 1_709_251_200_000);
        // "my tasks" now follows user 2, the assignee
        assert_eq!(session.menu.current_user, 2);
        let mine = assert_ok!(session.menu.my_tasks().await);
        assert_eq!(mine, vec![task]);
    }

    #[tokio::test]
    async fn test_my_tasks_follow_current_user() {
        // user 1 assigns a task to 5; user 1 has none, user 5 has it
        let script = "1\nReview\nCheck the diff\n5\n\n";

        let mut session = run_script(1, script).await;
        assert!(assert_ok!(session.menu.my_tasks().await).is_empty());

        session.menu.current_user = 5;
        let mine = assert_ok!(session.menu.my_tasks().await);
        assert_eq!(mine.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(), vec!["Review"]);
    }
}
