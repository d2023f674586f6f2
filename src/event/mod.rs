use std::sync::Arc;

use chrono::{DateTime, Utc};
use crossterm::event::KeyEvent;

use crate::app::state::Selected;
use crate::error::{AgoraError, LoadError};
use crate::model::{
    Booking, FilterField, NotificationDraft, OrderChat, PageId, ProfilePatch, ServiceId, UserRole,
    ViewKind, Wallet, WalletTransaction,
};
use crate::registry::ViewModule;

/// All events that can occur in the application.
/// Sourced from view callbacks, keyboard input, timers and view-module loads.
/// Every mutation of the state bag is one of these, applied by `update`.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Request a page transition
    Navigate(PageId),

    /// Replace the current page without a history entry (route redirects)
    Redirect(PageId),

    /// Return to the previously shown page
    Back,

    /// Set one selection pointer and navigate in a single step
    SelectAndGoTo { selection: Selected, page: PageId },

    /// Add the service to favorites, or remove it if already present
    ToggleFavorite(ServiceId),

    /// Replace one search/filter criterion
    SetFilter { field: FilterField, value: String },

    /// Start editing the search query in place
    OpenSearch,

    /// Sign in with a role, or sign out with `None`
    SetUserRole(Option<UserRole>),

    /// Merge a partial profile update
    UpdateProfile(ProfilePatch),

    SetWallet(Wallet),

    SetWalletTransactions(Vec<WalletTransaction>),

    SetBookings(Vec<Booking>),

    SetOrderChats(Vec<OrderChat>),

    /// Prepend a notification (id assigned by the state bag)
    AddNotification(NotificationDraft),

    /// Open or close the booking modal for the selected service
    ShowBookingModal(bool),

    /// Open the LOVE token purchase modal
    OpenLovePurchase,

    /// Open the premium upsell modal
    PremiumRequired,

    /// A lazily loaded view module finished loading (or failed)
    ViewLoaded {
        view: ViewKind,
        module: Result<Arc<dyn ViewModule>, LoadError>,
    },

    /// Keyboard input event
    Key(KeyEvent),

    /// Timer tick (spinner animation)
    Tick(DateTime<Utc>),

    /// Non-fatal error to surface in the status line
    Error { source: String, error: AgoraError },

    Quit,
}
