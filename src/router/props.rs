//! Prop slices handed to each view, and one builder per view.
//!
//! A slice carries the subset of the state bag the view reads plus the
//! handles it may invoke, and nothing else. Every code path that renders a
//! view (success, guard fallback, unknown page) goes through the same builder.

use serde::Serialize;

use super::callbacks::{
    AddNotification, Dispatcher, GoTo, NavigateTo, OnMatch, OpenLovePurchase, OpenSearch,
    PremiumRequired,
    SelectAndGoTo, SetBookings, SetFilter, SetOrderChats, SetTransactions, SetUserRole, SetWallet,
    ShowBookingModal, ToggleFavorite, UpdateProfile,
};
use crate::app::AppState;
use crate::model::{
    ApplicationId, Booking, CatalogItem, Directory, OrderChat, OrderChatId, PageId, Party,
    PartyId, Profile, Review, SearchFilters, SellerId, SellerProfile, ServiceId, UserId, UserRole,
    ViewKind, Wallet, WalletTransaction,
};

/// Everything a builder may read while assembling a slice.
#[derive(Debug, Clone, Copy)]
pub struct RouteCtx<'a> {
    pub state: &'a AppState,
    pub directory: &'a Directory,
    pub dispatcher: &'a Dispatcher,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeProps {
    pub user_role: Option<UserRole>,
    pub profile: Profile,
    pub catalog_items: Vec<CatalogItem>,
    pub favorites: Vec<ServiceId>,
    pub filters: SearchFilters,
    pub go_to: GoTo,
    pub toggle_favorite: ToggleFavorite,
    pub open_service: SelectAndGoTo<ServiceId>,
    pub set_filter: SetFilter,
    pub open_search: OpenSearch,
    pub premium_required: PremiumRequired,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogProps {
    pub catalog_items: Vec<CatalogItem>,
    pub favorites: Vec<ServiceId>,
    pub filters: SearchFilters,
    pub go_to: GoTo,
    pub toggle_favorite: ToggleFavorite,
    pub open_service: SelectAndGoTo<ServiceId>,
    pub set_filter: SetFilter,
    pub open_search: OpenSearch,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceDetailProps {
    pub service_id: Option<ServiceId>,
    pub catalog_items: Vec<CatalogItem>,
    pub reviews: Vec<Review>,
    pub favorites: Vec<ServiceId>,
    pub go_to: GoTo,
    pub toggle_favorite: ToggleFavorite,
    pub show_booking_modal: ShowBookingModal,
    pub open_seller: SelectAndGoTo<SellerId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileProps {
    pub profile: Profile,
    pub wallet: Wallet,
    pub transactions: Vec<WalletTransaction>,
    pub go_to: GoTo,
    pub update_profile: UpdateProfile,
    pub set_wallet: SetWallet,
    pub set_transactions: SetTransactions,
}

/// Register and login
#[derive(Debug, Clone, Serialize)]
pub struct AuthProps {
    pub go_to: GoTo,
    pub set_user_role: SetUserRole,
}

/// Informational pages that only navigate
#[derive(Debug, Clone, Serialize)]
pub struct BasicProps {
    pub go_to: GoTo,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoritesProps {
    pub catalog_items: Vec<CatalogItem>,
    pub favorites: Vec<ServiceId>,
    pub go_to: GoTo,
    pub toggle_favorite: ToggleFavorite,
    pub open_service: SelectAndGoTo<ServiceId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminProps {
    pub go_to: GoTo,
    pub add_notification: AddNotification,
}

#[derive(Debug, Clone, Serialize)]
pub struct WalletProps {
    pub wallet: Wallet,
    pub go_to: GoTo,
    pub open_love_purchase: OpenLovePurchase,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryProps {
    pub category_id: String,
    pub bookings: Vec<Booking>,
    pub go_to: GoTo,
    pub set_bookings: SetBookings,
}

#[derive(Debug, Clone, Serialize)]
pub struct SellerProfileProps {
    pub seller: SellerProfile,
    pub wallet: Wallet,
    pub go_to: GoTo,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartiesProps {
    pub parties: Vec<Party>,
    pub current_user_id: UserId,
    pub go_to: GoTo,
    pub open_party: SelectAndGoTo<PartyId>,
    pub open_organizer_dashboard: NavigateTo,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartyDetailProps {
    pub party_id: PartyId,
    /// Directory entry for `party_id`, when the directory has one
    pub party: Option<Party>,
    pub current_user_id: UserId,
    pub on_back: NavigateTo,
    pub on_start_chat: SelectAndGoTo<ApplicationId>,
    pub add_notification: AddNotification,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartyChatProps {
    pub application_id: ApplicationId,
    pub current_user_id: UserId,
    pub is_organizer: bool,
    pub on_back: NavigateTo,
}

#[derive(Debug, Clone, Serialize)]
pub struct MyAdsProps {
    pub profile: Profile,
    pub go_to: GoTo,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganizerDashboardProps {
    pub organizer_id: UserId,
    pub parties: Vec<Party>,
    pub on_back: NavigateTo,
    pub on_view_party: SelectAndGoTo<PartyId>,
    pub on_open_chat: SelectAndGoTo<ApplicationId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingsProps {
    pub user_role: Option<UserRole>,
    pub bookings: Vec<Booking>,
    pub go_to: GoTo,
    pub set_bookings: SetBookings,
}

#[derive(Debug, Clone, Serialize)]
pub struct MyOrdersProps {
    pub bookings: Vec<Booking>,
    pub order_chats: Vec<OrderChat>,
    pub current_user_id: UserId,
    pub go_to: GoTo,
    pub set_order_chats: SetOrderChats,
    pub open_order_chat: SelectAndGoTo<OrderChatId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderChatProps {
    pub chat_id: OrderChatId,
    pub order_chats: Vec<OrderChat>,
    pub bookings: Vec<Booking>,
    pub current_user_id: UserId,
    pub go_to: GoTo,
    pub set_order_chats: SetOrderChats,
}

#[derive(Debug, Clone, Serialize)]
pub struct SwipeProps {
    pub on_match: OnMatch,
}

/// A concrete view together with its prop slice.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", content = "props", rename_all = "kebab-case")]
pub enum ViewProps {
    Home(HomeProps),
    Catalog(CatalogProps),
    ServiceDetail(ServiceDetailProps),
    Profile(ProfileProps),
    Register(AuthProps),
    Login(AuthProps),
    Search(BasicProps),
    Favorites(FavoritesProps),
    Messages(BasicProps),
    Rules(BasicProps),
    Work(BasicProps),
    Admin(AdminProps),
    Referral(BasicProps),
    Raffle(BasicProps),
    Dating(BasicProps),
    Wallet(WalletProps),
    CategoryProviders(CategoryProps),
    Invitations(BasicProps),
    SellerProfile(SellerProfileProps),
    OnlineSearch(BasicProps),
    Parties(PartiesProps),
    PartyDetail(PartyDetailProps),
    PartyChat(PartyChatProps),
    MyAds(MyAdsProps),
    UserGuide(BasicProps),
    OrganizerDashboard(OrganizerDashboardProps),
    Bookings(BookingsProps),
    MyOrders(MyOrdersProps),
    OrderChat(OrderChatProps),
    Swipe(SwipeProps),
    Matches(BasicProps),
}

impl ViewProps {
    pub fn kind(&self) -> ViewKind {
        match self {
            ViewProps::Home(_) => ViewKind::Home,
            ViewProps::Catalog(_) => ViewKind::Catalog,
            ViewProps::ServiceDetail(_) => ViewKind::ServiceDetail,
            ViewProps::Profile(_) => ViewKind::Profile,
            ViewProps::Register(_) => ViewKind::Register,
            ViewProps::Login(_) => ViewKind::Login,
            ViewProps::Search(_) => ViewKind::Search,
            ViewProps::Favorites(_) => ViewKind::Favorites,
            ViewProps::Messages(_) => ViewKind::Messages,
            ViewProps::Rules(_) => ViewKind::Rules,
            ViewProps::Work(_) => ViewKind::Work,
            ViewProps::Admin(_) => ViewKind::Admin,
            ViewProps::Referral(_) => ViewKind::Referral,
            ViewProps::Raffle(_) => ViewKind::Raffle,
            ViewProps::Dating(_) => ViewKind::Dating,
            ViewProps::Wallet(_) => ViewKind::Wallet,
            ViewProps::CategoryProviders(_) => ViewKind::CategoryProviders,
            ViewProps::Invitations(_) => ViewKind::Invitations,
            ViewProps::SellerProfile(_) => ViewKind::SellerProfile,
            ViewProps::OnlineSearch(_) => ViewKind::OnlineSearch,
            ViewProps::Parties(_) => ViewKind::Parties,
            ViewProps::PartyDetail(_) => ViewKind::PartyDetail,
            ViewProps::PartyChat(_) => ViewKind::PartyChat,
            ViewProps::MyAds(_) => ViewKind::MyAds,
            ViewProps::UserGuide(_) => ViewKind::UserGuide,
            ViewProps::OrganizerDashboard(_) => ViewKind::OrganizerDashboard,
            ViewProps::Bookings(_) => ViewKind::Bookings,
            ViewProps::MyOrders(_) => ViewKind::MyOrders,
            ViewProps::OrderChat(_) => ViewKind::OrderChat,
            ViewProps::Swipe(_) => ViewKind::Swipe,
            ViewProps::Matches(_) => ViewKind::Matches,
        }
    }

    /// Serialized prop slice, handles rendered as a marker string
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self)
            .ok()
            .and_then(|mut v| v.get_mut("props").map(serde_json::Value::take))
            .unwrap_or(serde_json::Value::Null)
    }
}

fn go_to(ctx: &RouteCtx<'_>) -> GoTo {
    GoTo::new(ctx.dispatcher)
}

fn basic(ctx: &RouteCtx<'_>) -> BasicProps {
    BasicProps { go_to: go_to(ctx) }
}

fn auth(ctx: &RouteCtx<'_>) -> AuthProps {
    AuthProps {
        go_to: go_to(ctx),
        set_user_role: SetUserRole::new(ctx.dispatcher),
    }
}

pub fn home(ctx: &RouteCtx<'_>) -> ViewProps {
    let state = ctx.state;
    ViewProps::Home(HomeProps {
        user_role: state.user_role,
        profile: state.profile.clone(),
        catalog_items: state.catalog_items.clone(),
        favorites: state.favorites.clone(),
        filters: state.filters.clone(),
        go_to: go_to(ctx),
        toggle_favorite: ToggleFavorite::new(ctx.dispatcher),
        open_service: SelectAndGoTo::new(ctx.dispatcher, PageId::Service),
        set_filter: SetFilter::new(ctx.dispatcher),
        open_search: OpenSearch::new(ctx.dispatcher),
        premium_required: PremiumRequired::new(ctx.dispatcher),
    })
}

pub fn catalog(ctx: &RouteCtx<'_>) -> ViewProps {
    let state = ctx.state;
    ViewProps::Catalog(CatalogProps {
        catalog_items: state.catalog_items.clone(),
        favorites: state.favorites.clone(),
        filters: state.filters.clone(),
        go_to: go_to(ctx),
        toggle_favorite: ToggleFavorite::new(ctx.dispatcher),
        open_service: SelectAndGoTo::new(ctx.dispatcher, PageId::Service),
        set_filter: SetFilter::new(ctx.dispatcher),
        open_search: OpenSearch::new(ctx.dispatcher),
    })
}

pub fn service_detail(ctx: &RouteCtx<'_>) -> ViewProps {
    let state = ctx.state;
    ViewProps::ServiceDetail(ServiceDetailProps {
        service_id: state.selection.service,
        catalog_items: state.catalog_items.clone(),
        reviews: state.reviews.clone(),
        favorites: state.favorites.clone(),
        go_to: go_to(ctx),
        toggle_favorite: ToggleFavorite::new(ctx.dispatcher),
        show_booking_modal: ShowBookingModal::new(ctx.dispatcher),
        open_seller: SelectAndGoTo::new(ctx.dispatcher, PageId::SellerProfile),
    })
}

pub fn profile(ctx: &RouteCtx<'_>) -> ViewProps {
    let state = ctx.state;
    ViewProps::Profile(ProfileProps {
        profile: state.profile.clone(),
        wallet: state.wallet.clone(),
        transactions: state.wallet_transactions.clone(),
        go_to: go_to(ctx),
        update_profile: UpdateProfile::new(ctx.dispatcher),
        set_wallet: SetWallet::new(ctx.dispatcher),
        set_transactions: SetTransactions::new(ctx.dispatcher),
    })
}

pub fn register(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::Register(auth(ctx))
}

pub fn login(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::Login(auth(ctx))
}

pub fn search(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::Search(basic(ctx))
}

pub fn favorites(ctx: &RouteCtx<'_>) -> ViewProps {
    let state = ctx.state;
    ViewProps::Favorites(FavoritesProps {
        catalog_items: state.catalog_items.clone(),
        favorites: state.favorites.clone(),
        go_to: go_to(ctx),
        toggle_favorite: ToggleFavorite::new(ctx.dispatcher),
        open_service: SelectAndGoTo::new(ctx.dispatcher, PageId::Service),
    })
}

pub fn messages(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::Messages(basic(ctx))
}

pub fn rules(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::Rules(basic(ctx))
}

pub fn work(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::Work(basic(ctx))
}

pub fn admin(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::Admin(AdminProps {
        go_to: go_to(ctx),
        add_notification: AddNotification::new(ctx.dispatcher),
    })
}

pub fn referral(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::Referral(basic(ctx))
}

pub fn raffle(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::Raffle(basic(ctx))
}

pub fn dating(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::Dating(basic(ctx))
}

pub fn wallet(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::Wallet(WalletProps {
        wallet: ctx.state.wallet.clone(),
        go_to: go_to(ctx),
        open_love_purchase: OpenLovePurchase::new(ctx.dispatcher),
    })
}

pub fn category(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::CategoryProviders(CategoryProps {
        category_id: ctx.state.filters.category.clone(),
        bookings: ctx.state.bookings.clone(),
        go_to: go_to(ctx),
        set_bookings: SetBookings::new(ctx.dispatcher),
    })
}

pub fn invitations(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::Invitations(basic(ctx))
}

/// `None` when no seller is selected or the directory has no such seller
pub fn seller_profile(ctx: &RouteCtx<'_>) -> Option<ViewProps> {
    let seller = ctx.directory.seller(ctx.state.selection.seller?)?;
    Some(ViewProps::SellerProfile(SellerProfileProps {
        seller: seller.clone(),
        wallet: ctx.state.wallet.clone(),
        go_to: go_to(ctx),
    }))
}

pub fn online_search(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::OnlineSearch(basic(ctx))
}

pub fn parties(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::Parties(PartiesProps {
        parties: ctx.directory.parties.clone(),
        current_user_id: ctx.state.current_user_id,
        go_to: go_to(ctx),
        open_party: SelectAndGoTo::new(ctx.dispatcher, PageId::PartyDetail),
        open_organizer_dashboard: NavigateTo::new(ctx.dispatcher, PageId::OrganizerDashboard),
    })
}

pub fn party_detail(ctx: &RouteCtx<'_>) -> Option<ViewProps> {
    let party_id = ctx.state.selection.party?;
    Some(ViewProps::PartyDetail(PartyDetailProps {
        party_id,
        party: ctx.directory.party(party_id).cloned(),
        current_user_id: ctx.state.current_user_id,
        on_back: NavigateTo::new(ctx.dispatcher, PageId::Parties),
        on_start_chat: SelectAndGoTo::new(ctx.dispatcher, PageId::PartyChat),
        add_notification: AddNotification::new(ctx.dispatcher),
    }))
}

pub fn party_chat(ctx: &RouteCtx<'_>) -> Option<ViewProps> {
    let application_id = ctx.state.selection.application?;
    Some(ViewProps::PartyChat(PartyChatProps {
        application_id,
        current_user_id: ctx.state.current_user_id,
        is_organizer: false,
        on_back: NavigateTo::new(ctx.dispatcher, PageId::PartyDetail),
    }))
}

pub fn my_ads(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::MyAds(MyAdsProps {
        profile: ctx.state.profile.clone(),
        go_to: go_to(ctx),
    })
}

pub fn user_guide(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::UserGuide(basic(ctx))
}

pub fn organizer_dashboard(ctx: &RouteCtx<'_>) -> ViewProps {
    let organizer_id = ctx.state.current_user_id;
    ViewProps::OrganizerDashboard(OrganizerDashboardProps {
        organizer_id,
        parties: ctx.directory.parties_organized_by(organizer_id),
        on_back: NavigateTo::new(ctx.dispatcher, PageId::Parties),
        on_view_party: SelectAndGoTo::new(ctx.dispatcher, PageId::PartyDetail),
        on_open_chat: SelectAndGoTo::new(ctx.dispatcher, PageId::PartyChat),
    })
}

pub fn bookings(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::Bookings(BookingsProps {
        user_role: ctx.state.user_role,
        bookings: ctx.state.bookings.clone(),
        go_to: go_to(ctx),
        set_bookings: SetBookings::new(ctx.dispatcher),
    })
}

pub fn my_orders(ctx: &RouteCtx<'_>) -> ViewProps {
    let state = ctx.state;
    ViewProps::MyOrders(MyOrdersProps {
        bookings: state.bookings.clone(),
        order_chats: state.order_chats.clone(),
        current_user_id: state.current_user_id,
        go_to: go_to(ctx),
        set_order_chats: SetOrderChats::new(ctx.dispatcher),
        open_order_chat: SelectAndGoTo::new(ctx.dispatcher, PageId::OrderChat),
    })
}

pub fn order_chat(ctx: &RouteCtx<'_>) -> Option<ViewProps> {
    let state = ctx.state;
    let chat_id = state.selection.order_chat?;
    Some(ViewProps::OrderChat(OrderChatProps {
        chat_id,
        order_chats: state.order_chats.clone(),
        bookings: state.bookings.clone(),
        current_user_id: state.current_user_id,
        go_to: go_to(ctx),
        set_order_chats: SetOrderChats::new(ctx.dispatcher),
    }))
}

pub fn swipe(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::Swipe(SwipeProps {
        on_match: OnMatch::new(ctx.dispatcher),
    })
}

pub fn matches(ctx: &RouteCtx<'_>) -> ViewProps {
    ViewProps::Matches(basic(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SellerId;

    fn keys(props: &ViewProps) -> Vec<String> {
        let mut keys: Vec<String> = props
            .to_json()
            .as_object()
            .map(|o| o.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    #[test]
    fn wallet_slice_is_minimal() {
        let (dispatcher, _rx) = Dispatcher::channel();
        let state = AppState::new();
        let directory = Directory::default();
        let ctx = RouteCtx {
            state: &state,
            directory: &directory,
            dispatcher: &dispatcher,
        };
        assert_eq!(
            keys(&wallet(&ctx)),
            vec!["go_to", "open_love_purchase", "wallet"]
        );
    }

    #[test]
    fn swipe_only_gets_on_match() {
        let (dispatcher, _rx) = Dispatcher::channel();
        let state = AppState::new();
        let directory = Directory::default();
        let ctx = RouteCtx {
            state: &state,
            directory: &directory,
            dispatcher: &dispatcher,
        };
        assert_eq!(keys(&swipe(&ctx)), vec!["on_match"]);
    }

    #[test]
    fn seller_profile_requires_directory_entry() {
        let (dispatcher, _rx) = Dispatcher::channel();
        let mut state = AppState::new();
        state.selection.seller = Some(SellerId::new(5));
        let directory = Directory::default();
        let ctx = RouteCtx {
            state: &state,
            directory: &directory,
            dispatcher: &dispatcher,
        };
        assert!(seller_profile(&ctx).is_none());
    }

    #[test]
    fn category_reads_selected_category() {
        let (dispatcher, _rx) = Dispatcher::channel();
        let mut state = AppState::new();
        state.filters.category = "massage".into();
        let directory = Directory::default();
        let ctx = RouteCtx {
            state: &state,
            directory: &directory,
            dispatcher: &dispatcher,
        };
        match category(&ctx) {
            ViewProps::CategoryProviders(props) => assert_eq!(props.category_id, "massage"),
            other => panic!("unexpected view {:?}", other.kind()),
        }
    }

    #[test]
    fn kind_matches_serialized_tag() {
        let (dispatcher, _rx) = Dispatcher::channel();
        let state = AppState::new();
        let directory = Directory::default();
        let ctx = RouteCtx {
            state: &state,
            directory: &directory,
            dispatcher: &dispatcher,
        };
        let props = organizer_dashboard(&ctx);
        let tag = serde_json::to_value(&props).unwrap()["view"].clone();
        assert_eq!(tag, serde_json::to_value(props.kind()).unwrap());
    }
}
