//! Navigation callback contracts.
//!
//! Each handle can emit exactly one kind of [`AppEvent`] through a shared
//! [`Dispatcher`]. Views receive only the handles their prop slice names, so a
//! view can never request a mutation it was not given. Payloads are forwarded
//! unchanged; the router never wraps or intercepts them.

use std::marker::PhantomData;

use chrono::Utc;
use serde::{Serialize, Serializer};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

use crate::app::state::Selected;
use crate::event::AppEvent;
use crate::model::{
    Booking, FilterField, NotificationDraft, NotificationKind, OrderChat, PageId, ProfilePatch,
    ServiceId, UserRole, Wallet, WalletTransaction,
};

/// How a handle appears when a prop slice is serialized
pub const CALLBACK_MARKER: &str = "callback";

/// Cloneable sending half of the shell's event queue.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tx: UnboundedSender<AppEvent>,
}

impl Dispatcher {
    pub fn new(tx: UnboundedSender<AppEvent>) -> Self {
        Self { tx }
    }

    /// Dispatcher plus the receiver the shell drains
    pub fn channel() -> (Self, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn send(&self, event: AppEvent) {
        if self.tx.send(event).is_err() {
            warn!("dropping event: shell event queue closed");
        }
    }
}

macro_rules! callback {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            dispatcher: Dispatcher,
        }

        impl $name {
            pub fn new(dispatcher: &Dispatcher) -> Self {
                Self {
                    dispatcher: dispatcher.clone(),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(CALLBACK_MARKER)
            }
        }
    };
}

callback!(
    /// Base navigation primitive, available to every view
    GoTo
);
callback!(ToggleFavorite);
callback!(SetFilter);
callback!(OpenSearch);
callback!(SetUserRole);
callback!(UpdateProfile);
callback!(SetWallet);
callback!(SetTransactions);
callback!(SetBookings);
callback!(SetOrderChats);
callback!(AddNotification);
callback!(
    /// Raises a "new match" notification
    OnMatch
);
callback!(ShowBookingModal);
callback!(OpenLovePurchase);
callback!(PremiumRequired);
callback!(
    /// Page replacement used by route effects; leaves no history entry
    Redirect
);

impl GoTo {
    pub fn call(&self, page: PageId) {
        self.dispatcher.send(AppEvent::Navigate(page));
    }
}

impl ToggleFavorite {
    pub fn call(&self, id: ServiceId) {
        self.dispatcher.send(AppEvent::ToggleFavorite(id));
    }
}

impl SetFilter {
    pub fn call(&self, field: FilterField, value: impl Into<String>) {
        self.dispatcher.send(AppEvent::SetFilter {
            field,
            value: value.into(),
        });
    }
}

impl OpenSearch {
    pub fn call(&self) {
        self.dispatcher.send(AppEvent::OpenSearch);
    }
}

impl SetUserRole {
    pub fn call(&self, role: Option<UserRole>) {
        self.dispatcher.send(AppEvent::SetUserRole(role));
    }
}

impl UpdateProfile {
    pub fn call(&self, patch: ProfilePatch) {
        self.dispatcher.send(AppEvent::UpdateProfile(patch));
    }
}

impl SetWallet {
    pub fn call(&self, wallet: Wallet) {
        self.dispatcher.send(AppEvent::SetWallet(wallet));
    }
}

impl SetTransactions {
    pub fn call(&self, transactions: Vec<WalletTransaction>) {
        self.dispatcher
            .send(AppEvent::SetWalletTransactions(transactions));
    }
}

impl SetBookings {
    pub fn call(&self, bookings: Vec<Booking>) {
        self.dispatcher.send(AppEvent::SetBookings(bookings));
    }
}

impl SetOrderChats {
    pub fn call(&self, chats: Vec<OrderChat>) {
        self.dispatcher.send(AppEvent::SetOrderChats(chats));
    }
}

impl AddNotification {
    pub fn call(&self, kind: NotificationKind, title: &str, message: &str) {
        self.dispatcher.send(AppEvent::AddNotification(NotificationDraft::new(
            kind,
            title,
            message,
            Utc::now(),
        )));
    }
}

impl OnMatch {
    pub fn call(&self) {
        self.dispatcher
            .send(AppEvent::AddNotification(NotificationDraft::new_match(Utc::now())));
    }
}

impl ShowBookingModal {
    pub fn call(&self, show: bool) {
        self.dispatcher.send(AppEvent::ShowBookingModal(show));
    }
}

impl OpenLovePurchase {
    pub fn call(&self) {
        self.dispatcher.send(AppEvent::OpenLovePurchase);
    }
}

impl PremiumRequired {
    pub fn call(&self) {
        self.dispatcher.send(AppEvent::PremiumRequired);
    }
}

impl Redirect {
    pub fn call(&self, page: PageId) {
        self.dispatcher.send(AppEvent::Redirect(page));
    }
}

/// Navigation to a page fixed at construction ("back", "open dashboard").
#[derive(Debug, Clone)]
pub struct NavigateTo {
    dispatcher: Dispatcher,
    page: PageId,
}

impl NavigateTo {
    pub fn new(dispatcher: &Dispatcher, page: PageId) -> Self {
        Self {
            dispatcher: dispatcher.clone(),
            page,
        }
    }

    pub fn target(&self) -> PageId {
        self.page
    }

    pub fn call(&self) {
        self.dispatcher.send(AppEvent::Navigate(self.page));
    }
}

impl Serialize for NavigateTo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(CALLBACK_MARKER)
    }
}

/// Composite "set this selection pointer, then open this page".
///
/// Sends a single event, so the pointer and the page change in one update.
/// The id type fixes which pointer is written.
#[derive(Debug)]
pub struct SelectAndGoTo<I> {
    dispatcher: Dispatcher,
    page: PageId,
    _id: PhantomData<fn(I)>,
}

impl<I: Into<Selected>> SelectAndGoTo<I> {
    pub fn new(dispatcher: &Dispatcher, page: PageId) -> Self {
        Self {
            dispatcher: dispatcher.clone(),
            page,
            _id: PhantomData,
        }
    }

    pub fn target(&self) -> PageId {
        self.page
    }

    pub fn call(&self, id: I) {
        self.dispatcher.send(AppEvent::SelectAndGoTo {
            selection: id.into(),
            page: self.page,
        });
    }
}

impl<I> Clone for SelectAndGoTo<I> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
            page: self.page,
            _id: PhantomData,
        }
    }
}

impl<I> Serialize for SelectAndGoTo<I> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(CALLBACK_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PartyId, ViewKind};

    fn drain(rx: &mut UnboundedReceiver<AppEvent>) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[test]
    fn go_to_sends_navigate() {
        let (dispatcher, mut rx) = Dispatcher::channel();
        GoTo::new(&dispatcher).call(PageId::Rules);
        let events = drain(&mut rx);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], AppEvent::Navigate(PageId::Rules)));
    }

    #[test]
    fn select_and_go_to_sends_one_event() {
        let (dispatcher, mut rx) = Dispatcher::channel();
        let open_party = SelectAndGoTo::<PartyId>::new(&dispatcher, PageId::PartyDetail);
        open_party.call(PartyId::new(42));
        let events = drain(&mut rx);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            AppEvent::SelectAndGoTo {
                selection: Selected::Party(id),
                page: PageId::PartyDetail,
            } if id == PartyId::new(42)
        ));
    }

    #[test]
    fn fixed_navigation_targets_its_page() {
        let (dispatcher, mut rx) = Dispatcher::channel();
        let back = NavigateTo::new(&dispatcher, PageId::Parties);
        assert_eq!(back.target(), PageId::Parties);
        back.call();
        assert!(matches!(drain(&mut rx)[0], AppEvent::Navigate(PageId::Parties)));
    }

    #[test]
    fn on_match_adds_match_notification() {
        let (dispatcher, mut rx) = Dispatcher::channel();
        OnMatch::new(&dispatcher).call();
        match &drain(&mut rx)[0] {
            AppEvent::AddNotification(draft) => {
                assert_eq!(draft.kind, NotificationKind::Message);
                assert_eq!(draft.title, "New match");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn handles_serialize_as_marker() {
        let (dispatcher, _rx) = Dispatcher::channel();
        let json = serde_json::to_value(ToggleFavorite::new(&dispatcher)).unwrap();
        assert_eq!(json, serde_json::json!(CALLBACK_MARKER));
        let json = serde_json::to_value(NavigateTo::new(&dispatcher, PageId::Home)).unwrap();
        assert_eq!(json, serde_json::json!(CALLBACK_MARKER));
    }

    #[test]
    fn send_after_receiver_dropped_does_not_panic() {
        let (dispatcher, rx) = Dispatcher::channel();
        drop(rx);
        dispatcher.send(AppEvent::ViewLoaded {
            view: ViewKind::Home,
            module: Err(crate::error::LoadError::Aborted(ViewKind::Home)),
        });
    }
}
