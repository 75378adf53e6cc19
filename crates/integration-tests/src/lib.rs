//! Shared wiring for the end-to-end tests

use std::sync::Arc;
use taskflow_core::application::{
    ChangePublisher, ChannelSelector, NotificationListener, NotificationService, TaskService,
};
use taskflow_core::domain::NotificationKind;
use taskflow_core::port::notification_channel::mocks::RecordingChannel;
use taskflow_core::port::time_provider::mocks::ManualTimeProvider;
use taskflow_core::port::TaskListener;
use taskflow_infra_memory::InMemoryTaskRepository;

/// 2024-03-01T00:00:00Z
pub const START_MILLIS: i64 = 1_709_251_200_000;

/// Fully wired application with recording channels in place of the console
pub struct TestApp {
    pub repo: Arc<InMemoryTaskRepository>,
    pub direct: RecordingChannel,
    pub push: RecordingChannel,
    pub clock: Arc<ManualTimeProvider>,
    pub publisher: Arc<ChangePublisher>,
    pub tasks: TaskService,
    pub notifications: NotificationService,
}

impl TestApp {
    /// Production wiring: one NotificationListener on the direct channel
    pub fn new() -> Self {
        let app = Self::without_listeners();
        let listener: Arc<dyn TaskListener> =
            Arc::new(NotificationListener::new(Arc::new(app.direct.clone())));
        app.publisher.subscribe(listener);
        app
    }

    pub fn without_listeners() -> Self {
        let repo = Arc::new(InMemoryTaskRepository::new());
        let direct = RecordingChannel::new(NotificationKind::Direct);
        let push = RecordingChannel::new(NotificationKind::Push);
        let clock = Arc::new(ManualTimeProvider::new(START_MILLIS));
        let publisher = Arc::new(ChangePublisher::new());

        let tasks = TaskService::new(
            repo.clone(),
            Arc::new(direct.clone()),
            publisher.clone(),
            clock.clone(),
        );
        let notifications = NotificationService::new(ChannelSelector::new(
            Arc::new(direct.clone()),
            Arc::new(push.clone()),
        ));

        Self {
            repo,
            direct,
            push,
            clock,
            publisher,
            tasks,
            notifications,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
