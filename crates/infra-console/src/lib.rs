// Taskflow Infrastructure - Console Adapters
// Implements: NotificationChannel (direct message, push alert)

pub mod channel;
pub mod constants;

pub use channel::ConsoleChannel;
pub use constants::DEFAULT_DELIVERY_LATENCY;
