pub mod booking;
pub mod catalog;
pub mod filters;
pub mod ids;
pub mod notification;
pub mod page;
pub mod profile;
pub mod theme;
pub mod wallet;

pub use booking::{Booking, BookingStatus, ChatMessage, OrderChat};
pub use catalog::{
    ApplicationStatus, CatalogItem, Directory, Party, PartyApplication, Review, SellerProfile,
};
pub use filters::{FilterField, SearchFilters};
pub use ids::{
    ApplicationId, BookingId, NotificationId, OrderChatId, PartyId, SellerId, ServiceId, UserId,
};
pub use notification::{Notification, NotificationDraft, NotificationKind};
pub use page::{PageId, ViewKind};
pub use profile::{Profile, ProfilePatch, UserRole, VipStatus};
pub use theme::Theme;
pub use wallet::{Currency, TransactionKind, Wallet, WalletBalance, WalletTransaction};
