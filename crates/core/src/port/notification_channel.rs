// Notification Channel Port
// Abstraction over how a message reaches a user (direct message, push alert)

use crate::domain::{DeliveryReceipt, NotificationKind, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Notification Channel trait
///
/// Implementations:
/// - ConsoleChannel (infra-console): prints after a simulated latency
///
/// Delivery is best-effort and synchronous from the caller's side: `send`
/// returns once the (simulated) transmission is over. Nothing is retried.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Kind served by this channel
    fn kind(&self) -> NotificationKind;

    /// Deliver `message` to `user_id`
    ///
    /// # Errors
    /// - AppError::Notification if the channel cannot deliver
    async fn send(&self, message: &str, user_id: UserId) -> Result<DeliveryReceipt>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::sync::{Arc, Mutex};

    /// One captured delivery
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SentNotification {
        pub kind: NotificationKind,
        pub user_id: UserId,
        pub message: String,
    }

    /// Channel that records every delivery in order instead of printing it.
    ///
    /// Clones share the same log, so a test can keep one handle and give the
    /// other to the code under test.
    #[derive(Clone)]
    pub struct RecordingChannel {
        kind: NotificationKind,
        sent: Arc<Mutex<Vec<SentNotification>>>,
        fail_for: Arc<Mutex<Option<UserId>>>,
    }

    impl RecordingChannel {
        pub fn new(kind: NotificationKind) -> Self {
            Self {
                kind,
                sent: Arc::new(Mutex::new(Vec::new())),
                fail_for: Arc::new(Mutex::new(None)),
            }
        }

        /// Make every send addressed to `user_id` fail
        pub fn fail_for_user(&self, user_id: UserId) {
            *self.fail_for.lock().unwrap() = Some(user_id);
        }

        pub fn sent(&self) -> Vec<SentNotification> {
            self.sent.lock().unwrap().clone()
        }

        /// Recipients in delivery order
        pub fn recipients(&self) -> Vec<UserId> {
            self.sent().iter().map(|n| n.user_id).collect()
        }

        pub fn count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }

        pub fn clear(&self) {
            self.sent.lock().unwrap().clear();
        }
    }

    #[async_trait]
    impl NotificationChannel for RecordingChannel {
        fn kind(&self) -> NotificationKind {
            self.kind
        }

        async fn send(&self, message: &str, user_id: UserId) -> Result<DeliveryReceipt> {
            if *self.fail_for.lock().unwrap() == Some(user_id) {
                return Err(AppError::Notification(format!(
                    "mock delivery to user {} refused",
                    user_id
                )));
            }

            let mut sent = self.sent.lock().unwrap();
            sent.push(SentNotification {
                kind: self.kind,
                user_id,
                message: message.to_string(),
            });

            Ok(DeliveryReceipt {
                kind: self.kind,
                user_id,
                delivered_at: sent.len() as i64,
            })
        }
    }
}
