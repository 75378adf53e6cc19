// Observer - fan-out of task mutations to listeners

mod listener;
mod publisher;

pub use listener::NotificationListener;
pub use publisher::ChangePublisher;
