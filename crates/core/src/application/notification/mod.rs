// Notification Service - ad-hoc sends through a selected channel

mod selector;

pub use selector::ChannelSelector;

use crate::domain::{DeliveryReceipt, NotificationKind, UserId};
use crate::error::Result;
use tracing::info;

/// Sends one-off notifications picked by kind (the "test notifications" use case)
pub struct NotificationService {
    selector: ChannelSelector,
}

impl NotificationService {
    pub fn new(selector: ChannelSelector) -> Self {
        Self { selector }
    }

    /// Send through the channel registered for `kind`
    pub async fn send(
        &self,
        kind: NotificationKind,
        user_id: UserId,
        message: &str,
    ) -> Result<DeliveryReceipt> {
        let channel = self.selector.select(kind);
        let receipt = channel.send(message, user_id).await?;
        info!(kind = %kind, user_id = user_id, "Ad-hoc notification delivered");
        Ok(receipt)
    }

    /// Parse `kind` and send.
    ///
    /// # Errors
    /// - AppError::UnsupportedKind if `kind` is not a known tag (nothing is sent)
    pub async fn send_ad_hoc(
        &self,
        kind: &str,
        user_id: UserId,
        message: &str,
    ) -> Result<DeliveryReceipt> {
        let kind = ChannelSelector::parse_kind(kind)?;
        self.send(kind, user_id, message).await
    }
}
