//! Command-line and environment configuration

use clap::{Parser, ValueEnum};
use std::time::Duration;
use taskflow_core::domain::UserId;

const DEFAULT_USER: &str = "1";
const DEFAULT_LATENCY_MS: &str = "100";
const DEFAULT_CHANNEL: &str = "direct";

#[derive(Parser, Debug)]
#[command(name = "taskflow")]
#[command(about = "Collaborative task tracking console", long_about = None)]
#[command(version)]
pub struct Config {
    /// User acting in the console at startup
    #[arg(short, long, env = "TASKFLOW_USER", default_value = DEFAULT_USER)]
    pub user: UserId,

    /// Simulated delivery latency of every notification, in milliseconds
    #[arg(long, env = "TASKFLOW_NOTIFY_LATENCY_MS", default_value = DEFAULT_LATENCY_MS)]
    pub latency_ms: u64,

    /// Channel used for task notifications (direct or push)
    #[arg(long, env = "TASKFLOW_DEFAULT_CHANNEL", default_value = DEFAULT_CHANNEL)]
    pub default_channel: String,

    /// Log output format (logs go to stderr)
    #[arg(long, env = "TASKFLOW_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Development: human readable, colored
    Pretty,
    /// Production: JSON structured logging
    Json,
}

impl Config {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
