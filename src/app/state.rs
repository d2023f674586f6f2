use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::model::{
    ApplicationId, Booking, CatalogItem, NotificationId, Notification, NotificationDraft,
    OrderChat, OrderChatId, PageId, PartyId, Profile, Review, SearchFilters, SellerId, ServiceId,
    UserId, UserRole, Wallet, WalletTransaction,
};

/// Most recent notifications kept in the state bag
pub const MAX_NOTIFICATIONS: usize = 100;

/// Status-line error ring size
pub const MAX_ERRORS: usize = 100;

/// Back-stack depth for `Esc`
pub const MAX_HISTORY: usize = 32;

/// Shared application state bag.
///
/// Read by the router to pick a view, mutated only by `update`. The current
/// page is private: it changes through [`AppState::navigate`] and nothing else.
#[derive(Debug, Clone)]
pub struct AppState {
    current_page: PageId,

    /// Pages visited before the current one, most recent last
    history: Vec<PageId>,

    /// `None` means unauthenticated
    pub user_role: Option<UserRole>,

    pub current_user_id: UserId,

    pub profile: Profile,

    /// Externally loaded, read-mostly
    pub catalog_items: Vec<CatalogItem>,

    pub reviews: Vec<Review>,

    /// Favorite catalog item ids, in the order they were added
    pub favorites: Vec<ServiceId>,

    pub selection: Selection,

    pub filters: SearchFilters,

    pub wallet: Wallet,

    pub wallet_transactions: Vec<WalletTransaction>,

    pub bookings: Vec<Booking>,

    pub order_chats: Vec<OrderChat>,

    /// Newest first, capped at [`MAX_NOTIFICATIONS`]
    pub notifications: VecDeque<Notification>,

    next_notification_id: u64,

    /// Error message ring buffer (for status bar display)
    pub errors: VecDeque<String>,

    pub ui: UiState,
}

/// Nullable ids naming the entity a detail or chat page operates on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub service: Option<ServiceId>,
    pub seller: Option<SellerId>,
    pub party: Option<PartyId>,
    pub application: Option<ApplicationId>,
    pub order_chat: Option<OrderChatId>,
}

/// Names one selection pointer without its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPointer {
    Service,
    Seller,
    Party,
    Application,
    OrderChat,
}

/// A selection pointer together with the id to store in it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "pointer", content = "id", rename_all = "kebab-case")]
pub enum Selected {
    Service(ServiceId),
    Seller(SellerId),
    Party(PartyId),
    Application(ApplicationId),
    OrderChat(OrderChatId),
}

impl From<ServiceId> for Selected {
    fn from(id: ServiceId) -> Self {
        Selected::Service(id)
    }
}

impl From<SellerId> for Selected {
    fn from(id: SellerId) -> Self {
        Selected::Seller(id)
    }
}

impl From<PartyId> for Selected {
    fn from(id: PartyId) -> Self {
        Selected::Party(id)
    }
}

impl From<ApplicationId> for Selected {
    fn from(id: ApplicationId) -> Self {
        Selected::Application(id)
    }
}

impl From<OrderChatId> for Selected {
    fn from(id: OrderChatId) -> Self {
        Selected::OrderChat(id)
    }
}

impl Selected {
    pub fn pointer(self) -> SelectionPointer {
        match self {
            Selected::Service(_) => SelectionPointer::Service,
            Selected::Seller(_) => SelectionPointer::Seller,
            Selected::Party(_) => SelectionPointer::Party,
            Selected::Application(_) => SelectionPointer::Application,
            Selected::OrderChat(_) => SelectionPointer::OrderChat,
        }
    }
}

impl Selection {
    pub fn set(&mut self, selected: Selected) {
        match selected {
            Selected::Service(id) => self.service = Some(id),
            Selected::Seller(id) => self.seller = Some(id),
            Selected::Party(id) => self.party = Some(id),
            Selected::Application(id) => self.application = Some(id),
            Selected::OrderChat(id) => self.order_chat = Some(id),
        }
    }

    pub fn is_set(&self, pointer: SelectionPointer) -> bool {
        match pointer {
            SelectionPointer::Service => self.service.is_some(),
            SelectionPointer::Seller => self.seller.is_some(),
            SelectionPointer::Party => self.party.is_some(),
            SelectionPointer::Application => self.application.is_some(),
            SelectionPointer::OrderChat => self.order_chat.is_some(),
        }
    }
}

/// Host-shell presentation state: overlays, modals, list cursor, spinner.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Page prompt text while `:` mode is active
    pub prompt: Option<String>,

    /// Catalog search text while `/` mode is active
    pub search: Option<String>,

    pub show_help: bool,

    pub show_booking_modal: bool,

    pub show_premium_modal: bool,

    pub show_love_purchase: bool,

    /// Highlighted row in the active view's list
    pub cursor: usize,

    /// Advanced on every tick, drives the loading spinner
    pub spinner_frame: usize,

    pub should_quit: bool,
}

impl UiState {
    pub fn has_modal(&self) -> bool {
        self.show_booking_modal || self.show_premium_modal || self.show_love_purchase
    }

    pub fn close_modals(&mut self) {
        self.show_booking_modal = false;
        self.show_premium_modal = false;
        self.show_love_purchase = false;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create new default application state
    pub fn new() -> Self {
        Self {
            current_page: PageId::DEFAULT,
            history: Vec::new(),
            user_role: None,
            current_user_id: UserId::new(1),
            profile: Profile::default(),
            catalog_items: Vec::new(),
            reviews: Vec::new(),
            favorites: Vec::new(),
            selection: Selection::default(),
            filters: SearchFilters::default(),
            wallet: Wallet::default(),
            wallet_transactions: Vec::new(),
            bookings: Vec::new(),
            order_chats: Vec::new(),
            notifications: VecDeque::with_capacity(MAX_NOTIFICATIONS),
            next_notification_id: 1,
            errors: VecDeque::with_capacity(MAX_ERRORS),
            ui: UiState::default(),
        }
    }

    /// Create new state opened on the given page
    pub fn with_page(page: PageId) -> Self {
        Self {
            current_page: page,
            ..Self::new()
        }
    }

    /// Create new state signed in with the given role
    pub fn with_role(role: UserRole) -> Self {
        Self {
            user_role: Some(role),
            ..Self::new()
        }
    }

    pub fn current_page(&self) -> PageId {
        self.current_page
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_role.is_some()
    }

    /// The page setter. Records the previous page for `Esc` and resets the
    /// list cursor. Navigating to the current page is a no-op.
    pub fn navigate(&mut self, page: PageId) {
        if page == self.current_page {
            return;
        }
        if self.history.len() >= MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push(self.current_page);
        self.current_page = page;
        self.ui.cursor = 0;
    }

    /// Replace the current page without recording it, so `Esc` skips the
    /// page that redirected.
    pub fn redirect(&mut self, page: PageId) {
        self.current_page = page;
        self.ui.cursor = 0;
    }

    /// Pop the back-stack. Returns false when there is nowhere to go.
    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current_page = previous;
                self.ui.cursor = 0;
                true
            }
            None => false,
        }
    }

    pub fn history(&self) -> &[PageId] {
        &self.history
    }

    pub fn toggle_favorite(&mut self, id: ServiceId) -> bool {
        if let Some(pos) = self.favorites.iter().position(|&fav| fav == id) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(id);
            true
        }
    }

    pub fn push_notification(&mut self, draft: NotificationDraft) -> NotificationId {
        let id = NotificationId::new(self.next_notification_id);
        self.next_notification_id += 1;
        if self.notifications.len() >= MAX_NOTIFICATIONS {
            self.notifications.pop_back();
        }
        self.notifications.push_front(draft.into_notification(id));
        id
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn push_error(&mut self, message: String) {
        if self.errors.len() >= MAX_ERRORS {
            self.errors.pop_front();
        }
        self.errors.push_back(message);
    }
}
