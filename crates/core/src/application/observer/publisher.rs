// Change Publisher - registry of task listeners

use crate::domain::{Task, TaskId, TaskStatus, UserId};
use crate::error::{AppError, Result};
use crate::port::TaskListener;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

/// Event handed to every listener
#[derive(Debug, Clone, Copy)]
enum TaskEvent<'a> {
    StatusChanged {
        task: &'a Task,
        old_status: TaskStatus,
    },
    Assigned {
        task: &'a Task,
        previous_assignee: Option<UserId>,
    },
}

impl TaskEvent<'_> {
    fn name(&self) -> &'static str {
        match self {
            TaskEvent::StatusChanged { .. } => "status_changed",
            TaskEvent::Assigned { .. } => "assigned",
        }
    }

    fn task_id(&self) -> TaskId {
        match self {
            TaskEvent::StatusChanged { task, .. } | TaskEvent::Assigned { task, .. } => task.id,
        }
    }
}

/// Observer registry for task mutations.
///
/// Listeners run in subscription order, one at a time: each handler is
/// awaited before the next starts. The first failure aborts the rest of
/// that publish call and is returned as `AppError::Listener`.
///
/// Subscription is expected at setup time. Publishing works on a snapshot
/// of the list, so a subscribe/unsubscribe racing a publish only affects the
/// next event.
#[derive(Default)]
pub struct ChangePublisher {
    listeners: RwLock<Vec<Arc<dyn TaskListener>>>,
}

impl ChangePublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener (returns false if this exact handle is already registered)
    pub fn subscribe(&self, listener: Arc<dyn TaskListener>) -> bool {
        let mut listeners = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        if listeners.iter().any(|l| same_listener(l, &listener)) {
            debug!(listener = listener.name(), "Listener already subscribed");
            return false;
        }
        debug!(listener = listener.name(), "Listener subscribed");
        listeners.push(listener);
        true
    }

    /// Remove a listener (no-op returning false if it was never registered)
    pub fn unsubscribe(&self, listener: &Arc<dyn TaskListener>) -> bool {
        let mut listeners = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|l| !same_listener(l, listener));
        before != listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Announce a status transition to every listener
    pub async fn publish_status_changed(&self, task: &Task, old_status: TaskStatus) -> Result<()> {
        self.publish(TaskEvent::StatusChanged { task, old_status })
            .await
    }

    /// Announce an assignee change to every listener
    pub async fn publish_assigned(
        &self,
        task: &Task,
        previous_assignee: Option<UserId>,
    ) -> Result<()> {
        self.publish(TaskEvent::Assigned {
            task,
            previous_assignee,
        })
        .await
    }

    async fn publish(&self, event: TaskEvent<'_>) -> Result<()> {
        // Never hold the lock across an await
        let listeners = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        for listener in listeners {
            debug!(
                listener = listener.name(),
                event = event.name(),
                task_id = event.task_id(),
                "Dispatching task event"
            );

            let outcome = match event {
                TaskEvent::StatusChanged { task, old_status } => {
                    listener.on_status_changed(task, old_status).await
                }
                TaskEvent::Assigned {
                    task,
                    previous_assignee,
                } => listener.on_assigned(task, previous_assignee).await,
            };

            if let Err(e) = outcome {
                warn!(
                    listener = listener.name(),
                    event = event.name(),
                    task_id = event.task_id(),
                    error = %e,
                    "Listener failed, skipping remaining listeners"
                );
                return Err(AppError::Listener {
                    listener: listener.name().to_string(),
                    source: Box::new(e),
                });
            }
        }
        Ok(())
    }
}

fn same_listener(a: &Arc<dyn TaskListener>, b: &Arc<dyn TaskListener>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
