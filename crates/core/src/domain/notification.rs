// Notification Domain Types

use super::error::{DomainError, Result};
use super::task::UserId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Delivery strategy for a notification.
///
/// Closed set: anything outside it is rejected when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Direct message (the e-mail style channel)
    Direct,
    /// Push alert
    Push,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 2] = [NotificationKind::Direct, NotificationKind::Push];

    pub const fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Direct => "direct",
            NotificationKind::Push => "push",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "direct" | "email" => Ok(NotificationKind::Direct),
            "push" => Ok(NotificationKind::Push),
            _ => Err(DomainError::UnknownNotificationKind(value.to_string())),
        }
    }
}

impl TryFrom<&str> for NotificationKind {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

/// Acknowledgement returned once a channel has finished a delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub kind: NotificationKind,
    pub user_id: UserId,
    pub delivered_at: i64, // epoch ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!("direct".parse::<NotificationKind>(), Ok(NotificationKind::Direct));
        assert_eq!("Email".parse::<NotificationKind>(), Ok(NotificationKind::Direct));
        assert_eq!(" PUSH ".parse::<NotificationKind>(), Ok(NotificationKind::Push));
    }

    #[test]
    fn test_parse_unknown_kind_fails() {
        assert_eq!(
            NotificationKind::try_from("sms"),
            Err(DomainError::UnknownNotificationKind("sms".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in NotificationKind::ALL {
            assert_eq!(kind.to_string().parse::<NotificationKind>(), Ok(kind));
        }
    }
}
