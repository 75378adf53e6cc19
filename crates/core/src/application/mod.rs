// Application Layer - Use Cases and Business Logic

pub mod messages;
pub mod notification;
pub mod observer;
pub mod task_service;

// Re-exports
pub use notification::{ChannelSelector, NotificationService};
pub use observer::{ChangePublisher, NotificationListener};
pub use task_service::TaskService;
