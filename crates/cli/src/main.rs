//! Taskflow - Main Entry Point
//! Interactive console over the task service (composition root)

mod config;
mod input;
mod logging;
mod menu;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;

use config::Config;
use menu::Menu;
use taskflow_core::application::{
    ChangePublisher, ChannelSelector, NotificationListener, NotificationService, TaskService,
};
use taskflow_core::domain::NotificationKind;
use taskflow_core::port::time_provider::SystemTimeProvider;
use taskflow_core::port::{NotificationChannel, TaskListener, TimeProvider};
use taskflow_infra_console::ConsoleChannel;
use taskflow_infra_memory::InMemoryTaskRepository;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration (flags + TASKFLOW_* environment)
    let config = Config::parse();

    // 2. Initialize logging
    logging::init(config.log_format).context("Failed to initialize logging")?;
    info!(version = taskflow_core::VERSION, user = config.user, "Taskflow starting");

    // 3. Setup dependencies (DI wiring)
    let time_provider: Arc<dyn TimeProvider> = Arc::new(SystemTimeProvider);
    let direct: Arc<dyn NotificationChannel> = Arc::new(ConsoleChannel::new(
        NotificationKind::Direct,
        config.latency(),
        time_provider.clone(),
    ));
    let push: Arc<dyn NotificationChannel> = Arc::new(ConsoleChannel::new(
        NotificationKind::Push,
        config.latency(),
        time_provider.clone(),
    ));
    let selector = ChannelSelector::new(direct, push);

    let task_channel = selector
        .select_named(&config.default_channel)
        .context("Invalid --default-channel")?;
    info!(channel = %task_channel.kind(), "Task notifications channel selected");

    let publisher = Arc::new(ChangePublisher::new());
    let listener: Arc<dyn TaskListener> = Arc::new(NotificationListener::new(task_channel.clone()));
    publisher.subscribe(listener);
    info!(listeners = publisher.listener_count(), "Change publisher ready");

    let task_service = TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        task_channel,
        publisher,
        time_provider.clone(),
    );
    let notification_service = NotificationService::new(selector);

    // 4. Run the menu loop until exit or end of input
    let stdin = BufReader::new(tokio::io::stdin());
    let mut menu = Menu::new(
        task_service,
        notification_service,
        time_provider,
        config.user,
        stdin,
    );
    menu.run().await?;

    info!("Taskflow stopped");
    Ok(())
}
