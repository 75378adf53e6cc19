// Channel Selector - maps a notification kind to its channel

use crate::domain::NotificationKind;
use crate::error::Result;
use crate::port::NotificationChannel;
use std::sync::Arc;

/// Pure mapping from kind to channel implementation
#[derive(Clone)]
pub struct ChannelSelector {
    direct: Arc<dyn NotificationChannel>,
    push: Arc<dyn NotificationChannel>,
}

impl ChannelSelector {
    pub fn new(direct: Arc<dyn NotificationChannel>, push: Arc<dyn NotificationChannel>) -> Self {
        Self { direct, push }
    }

    /// Channel for `kind`
    pub fn select(&self, kind: NotificationKind) -> Arc<dyn NotificationChannel> {
        match kind {
            NotificationKind::Direct => Arc::clone(&self.direct),
            NotificationKind::Push => Arc::clone(&self.push),
        }
    }

    /// Channel for a raw kind tag
    ///
    /// # Errors
    /// - AppError::UnsupportedKind if the tag names no known kind
    pub fn select_named(&self, kind: &str) -> Result<Arc<dyn NotificationChannel>> {
        Self::parse_kind(kind).map(|k| self.select(k))
    }

    /// Validate a raw kind tag against the fixed set
    pub fn parse_kind(kind: &str) -> Result<NotificationKind> {
        Ok(kind.parse::<NotificationKind>()?)
    }
}
