// Console notification channel
// Prints the message, then waits out a fixed simulated latency

use async_trait::async_trait;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::debug;

use taskflow_core::domain::{DeliveryReceipt, NotificationKind, UserId};
use taskflow_core::error::Result;
use taskflow_core::port::{NotificationChannel, TimeProvider};

/// Channel that "delivers" by writing a line to the console.
///
/// The same type serves both kinds; only the rendered prefix differs.
/// Delivery never fails except on a write error, and is never retried.
pub struct ConsoleChannel {
    kind: NotificationKind,
    latency: Duration,
    time_provider: Arc<dyn TimeProvider>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleChannel {
    /// Create a channel printing to stdout
    ///
    /// # Arguments
    /// * `kind` - Kind served by this channel
    /// * `latency` - Simulated transmission time awaited by every send
    /// * `time_provider` - Clock used for delivery receipts
    pub fn new(
        kind: NotificationKind,
        latency: Duration,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self::with_writer(kind, latency, time_provider, std::io::stdout())
    }

    /// Create a channel printing to `out` instead of stdout
    pub fn with_writer(
        kind: NotificationKind,
        latency: Duration,
        time_provider: Arc<dyn TimeProvider>,
        out: impl Write + Send + 'static,
    ) -> Self {
        Self {
            kind,
            latency,
            time_provider,
            out: Mutex::new(Box::new(out)),
        }
    }

    fn render(&self, message: &str, user_id: UserId) -> String {
        match self.kind {
            NotificationKind::Direct => format!("[direct] message to user {}: {}", user_id, message),
            NotificationKind::Push => format!("[push] alert to user {}: {}", user_id, message),
        }
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

#[async_trait]
impl NotificationChannel for ConsoleChannel {
    fn kind(&self) -> NotificationKind {
        self.kind
    }

    async fn send(&self, message: &str, user_id: UserId) -> Result<DeliveryReceipt> {
        self.write_line(&self.render(message, user_id))?;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        debug!(kind = %self.kind, user_id = user_id, "Notification delivered");
        Ok(DeliveryReceipt {
            kind: self.kind,
            user_id,
            delivered_at: self.time_provider.now_millis(),
        })
    }
}
