use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownPage;

/// Closed set of top-level screens the host can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    Home,
    Catalog,
    Service,
    Profile,
    Register,
    Login,
    Search,
    Favorites,
    Messages,
    Rules,
    Work,
    Admin,
    Referral,
    Raffle,
    Dating,
    Wallet,
    Category,
    Invitations,
    SellerProfile,
    OnlineSearch,
    Parties,
    PartyDetail,
    PartyChat,
    MyAds,
    UserGuide,
    OrganizerDashboard,
    Bookings,
    MyOrders,
    OrderChat,
    Swipe,
    Premium,
    Matches,
}

impl PageId {
    pub const ALL: [PageId; 32] = [
        PageId::Home,
        PageId::Catalog,
        PageId::Service,
        PageId::Profile,
        PageId::Register,
        PageId::Login,
        PageId::Search,
        PageId::Favorites,
        PageId::Messages,
        PageId::Rules,
        PageId::Work,
        PageId::Admin,
        PageId::Referral,
        PageId::Raffle,
        PageId::Dating,
        PageId::Wallet,
        PageId::Category,
        PageId::Invitations,
        PageId::SellerProfile,
        PageId::OnlineSearch,
        PageId::Parties,
        PageId::PartyDetail,
        PageId::PartyChat,
        PageId::MyAds,
        PageId::UserGuide,
        PageId::OrganizerDashboard,
        PageId::Bookings,
        PageId::MyOrders,
        PageId::OrderChat,
        PageId::Swipe,
        PageId::Premium,
        PageId::Matches,
    ];

    /// Page shown whenever a request cannot be honoured.
    pub const DEFAULT: PageId = PageId::Home;

    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Catalog => "catalog",
            PageId::Service => "service",
            PageId::Profile => "profile",
            PageId::Register => "register",
            PageId::Login => "login",
            PageId::Search => "search",
            PageId::Favorites => "favorites",
            PageId::Messages => "messages",
            PageId::Rules => "rules",
            PageId::Work => "work",
            PageId::Admin => "admin",
            PageId::Referral => "referral",
            PageId::Raffle => "raffle",
            PageId::Dating => "dating",
            PageId::Wallet => "wallet",
            PageId::Category => "category",
            PageId::Invitations => "invitations",
            PageId::SellerProfile => "seller-profile",
            PageId::OnlineSearch => "online-search",
            PageId::Parties => "parties",
            PageId::PartyDetail => "party-detail",
            PageId::PartyChat => "party-chat",
            PageId::MyAds => "my-ads",
            PageId::UserGuide => "user-guide",
            PageId::OrganizerDashboard => "organizer-dashboard",
            PageId::Bookings => "bookings",
            PageId::MyOrders => "my-orders",
            PageId::OrderChat => "order-chat",
            PageId::Swipe => "swipe",
            PageId::Premium => "premium",
            PageId::Matches => "matches",
        }
    }

    /// Total parse: anything outside the closed set resolves to [`PageId::DEFAULT`].
    pub fn resolve(raw: &str) -> PageId {
        raw.parse().unwrap_or(PageId::DEFAULT)
    }

    /// Map a location path such as `/party-detail` onto a page.
    ///
    /// `/` and every unrecognised path land on the home page.
    pub fn from_path(path: &str) -> PageId {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed.strip_prefix('/') {
            Some(rest) if !rest.contains('/') => PageId::resolve(rest),
            _ => PageId::DEFAULT,
        }
    }

    /// Page to open at startup for a requested page.
    ///
    /// Unauthenticated sessions are sent to `login` unless they asked for one
    /// of the two auth pages.
    pub fn initial(requested: PageId, authenticated: bool) -> PageId {
        if authenticated || matches!(requested, PageId::Login | PageId::Register) {
            requested
        } else {
            PageId::Login
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .iter()
            .copied()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Identity of a renderable view module.
///
/// Several pages can render the same view (every guard failure renders
/// `Home`), so views are keyed separately from pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    Home,
    Catalog,
    ServiceDetail,
    Profile,
    Register,
    Login,
    Search,
    Favorites,
    Messages,
    Rules,
    Work,
    Admin,
    Referral,
    Raffle,
    Dating,
    Wallet,
    CategoryProviders,
    Invitations,
    SellerProfile,
    OnlineSearch,
    Parties,
    PartyDetail,
    PartyChat,
    MyAds,
    UserGuide,
    OrganizerDashboard,
    Bookings,
    MyOrders,
    OrderChat,
    Swipe,
    Matches,
}

impl ViewKind {
    pub const ALL: [ViewKind; 31] = [
        ViewKind::Home,
        ViewKind::Catalog,
        ViewKind::ServiceDetail,
        ViewKind::Profile,
        ViewKind::Register,
        ViewKind::Login,
        ViewKind::Search,
        ViewKind::Favorites,
        ViewKind::Messages,
        ViewKind::Rules,
        ViewKind::Work,
        ViewKind::Admin,
        ViewKind::Referral,
        ViewKind::Raffle,
        ViewKind::Dating,
        ViewKind::Wallet,
        ViewKind::CategoryProviders,
        ViewKind::Invitations,
        ViewKind::SellerProfile,
        ViewKind::OnlineSearch,
        ViewKind::Parties,
        ViewKind::PartyDetail,
        ViewKind::PartyChat,
        ViewKind::MyAds,
        ViewKind::UserGuide,
        ViewKind::OrganizerDashboard,
        ViewKind::Bookings,
        ViewKind::MyOrders,
        ViewKind::OrderChat,
        ViewKind::Swipe,
        ViewKind::Matches,
    ];

    /// Views bundled with the shell rather than loaded on first use.
    pub fn is_eager(self) -> bool {
        matches!(self, ViewKind::Home | ViewKind::Catalog)
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Home => "Home",
            ViewKind::Catalog => "Catalog",
            ViewKind::ServiceDetail => "Service",
            ViewKind::Profile => "Profile",
            ViewKind::Register => "Register",
            ViewKind::Login => "Log in",
            ViewKind::Search => "Search",
            ViewKind::Favorites => "Favorites",
            ViewKind::Messages => "Messages",
            ViewKind::Rules => "Rules",
            ViewKind::Work => "Work with us",
            ViewKind::Admin => "Admin",
            ViewKind::Referral => "Referral program",
            ViewKind::Raffle => "Raffle",
            ViewKind::Dating => "Dating",
            ViewKind::Wallet => "Wallet",
            ViewKind::CategoryProviders => "Category",
            ViewKind::Invitations => "Invitations",
            ViewKind::SellerProfile => "Seller",
            ViewKind::OnlineSearch => "Online now",
            ViewKind::Parties => "Parties",
            ViewKind::PartyDetail => "Party",
            ViewKind::PartyChat => "Party chat",
            ViewKind::MyAds => "My ads",
            ViewKind::UserGuide => "User guide",
            ViewKind::OrganizerDashboard => "Organizer dashboard",
            ViewKind::Bookings => "Bookings",
            ViewKind::MyOrders => "My orders",
            ViewKind::OrderChat => "Order chat",
            ViewKind::Swipe => "Swipe",
            ViewKind::Matches => "Matches",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
