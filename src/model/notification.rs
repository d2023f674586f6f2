use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::NotificationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Message,
    Booking,
    Review,
    System,
    Referral,
    AdResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: DateTime<Utc>,
    pub read: bool,
}

/// Notification content before the state bag assigns it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationDraft {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: DateTime<Utc>,
}

impl NotificationDraft {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        time: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            time,
        }
    }

    /// Draft raised when a swipe produces a mutual match
    pub fn new_match(time: DateTime<Utc>) -> Self {
        Self::new(NotificationKind::Message, "New match", "You have a new match!", time)
    }

    pub fn into_notification(self, id: NotificationId) -> Notification {
        Notification {
            id,
            kind: self.kind,
            title: self.title,
            message: self.message,
            time: self.time,
            read: false,
        }
    }
}
