use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{BookingId, OrderChatId, SellerId, ServiceId, UserId};
use super::wallet::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    PendingSellerConfirmation,
    Confirmed,
    SellerReady,
    BuyerReady,
    InProgress,
    Completed,
    Cancelled,
    Rejected,
}

impl BookingStatus {
    pub fn is_open(self) -> bool {
        !matches!(
            self,
            BookingStatus::Completed | BookingStatus::Cancelled | BookingStatus::Rejected
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub service_id: ServiceId,
    pub service_name: String,
    pub seller_id: SellerId,
    pub buyer_id: UserId,
    pub date: String,
    pub time: String,
    /// Hours
    pub duration: u32,
    pub total_price: f64,
    pub currency: Currency,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub sender_id: UserId,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderChat {
    pub id: OrderChatId,
    pub booking_id: BookingId,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl OrderChat {
    pub fn unread_for(&self, user: UserId) -> usize {
        self.messages
            .iter()
            .filter(|m| !m.read && m.sender_id != user)
            .count()
    }
}
