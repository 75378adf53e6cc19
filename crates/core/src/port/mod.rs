// Port Layer - Interfaces for external dependencies

pub mod notification_channel;
pub mod task_listener;
pub mod task_repository;
pub mod time_provider; // For deterministic testing

// Re-exports
pub use notification_channel::NotificationChannel;
pub use task_listener::TaskListener;
pub use task_repository::TaskRepository;
pub use time_provider::TimeProvider;
