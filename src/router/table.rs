//! Route table: one row per page identifier.
//!
//! Adding a page means adding a row here and a builder in `props`; the
//! interpreter in `router` never changes.

use super::props::{self, RouteCtx, ViewProps};
use crate::app::SelectionPointer;
use crate::model::PageId;

/// Builds a slice that is always available.
pub type Builder = fn(&RouteCtx<'_>) -> ViewProps;

/// Builds a slice that depends on external data; `None` falls back to home.
pub type PartialBuilder = fn(&RouteCtx<'_>) -> Option<ViewProps>;

#[derive(Clone, Copy)]
pub enum Build {
    Total(Builder),
    Partial(PartialBuilder),
}

/// Precondition checked before the row's builder runs.
#[derive(Clone, Copy)]
pub enum Guard {
    Open,
    /// Requires a signed-in role; otherwise renders `otherwise`
    Authenticated { otherwise: Builder },
    /// Requires the named selection pointer; otherwise renders home
    Selected(SelectionPointer),
}

/// The single side effect a route may perform during a routing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Move the page back to home and raise the premium prompt
    PremiumRedirect,
}

#[derive(Clone, Copy)]
pub struct Route {
    pub page: PageId,
    pub guard: Guard,
    pub build: Build,
    pub effect: Effect,
}

impl Route {
    fn to(page: PageId, builder: Builder) -> Self {
        Self {
            page,
            guard: Guard::Open,
            build: Build::Total(builder),
            effect: Effect::None,
        }
    }

    fn lookup(page: PageId, builder: PartialBuilder) -> Self {
        Self {
            page,
            guard: Guard::Open,
            build: Build::Partial(builder),
            effect: Effect::None,
        }
    }

    fn guarded(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }

    fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }
}

pub fn routes() -> Vec<Route> {
    vec![
        Route::to(PageId::Home, props::home),
        Route::to(PageId::Catalog, props::catalog),
        Route::to(PageId::Service, props::service_detail),
        Route::to(PageId::Profile, props::profile).guarded(Guard::Authenticated {
            otherwise: props::register,
        }),
        Route::to(PageId::Register, props::register),
        Route::to(PageId::Login, props::login),
        Route::to(PageId::Search, props::search),
        Route::to(PageId::Favorites, props::favorites),
        Route::to(PageId::Messages, props::messages),
        Route::to(PageId::Rules, props::rules),
        Route::to(PageId::Work, props::work),
        Route::to(PageId::Admin, props::admin),
        Route::to(PageId::Referral, props::referral),
        Route::to(PageId::Raffle, props::raffle),
        Route::to(PageId::Dating, props::dating),
        Route::to(PageId::Wallet, props::wallet),
        Route::to(PageId::Category, props::category),
        Route::to(PageId::Invitations, props::invitations),
        Route::lookup(PageId::SellerProfile, props::seller_profile)
            .guarded(Guard::Selected(SelectionPointer::Seller)),
        Route::to(PageId::OnlineSearch, props::online_search),
        Route::to(PageId::Parties, props::parties),
        Route::lookup(PageId::PartyDetail, props::party_detail)
            .guarded(Guard::Selected(SelectionPointer::Party)),
        Route::lookup(PageId::PartyChat, props::party_chat)
            .guarded(Guard::Selected(SelectionPointer::Application)),
        Route::to(PageId::MyAds, props::my_ads),
        Route::to(PageId::UserGuide, props::user_guide),
        Route::to(PageId::OrganizerDashboard, props::organizer_dashboard),
        Route::to(PageId::Bookings, props::bookings),
        Route::to(PageId::MyOrders, props::my_orders),
        Route::lookup(PageId::OrderChat, props::order_chat)
            .guarded(Guard::Selected(SelectionPointer::OrderChat)),
        Route::to(PageId::Swipe, props::swipe),
        Route::to(PageId::Premium, props::home).with_effect(Effect::PremiumRedirect),
        Route::to(PageId::Matches, props::matches),
    ]
}
