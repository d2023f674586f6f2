use tracing::{debug, trace, warn};

use crate::app::{handle_key, AppState};
use crate::event::AppEvent;

/// Pure update function following Elm Architecture.
/// Takes current state and event, returns new state.
/// The only place the state bag is mutated; events are applied in the order
/// they were sent.
pub fn update(mut state: AppState, event: AppEvent) -> AppState {
    match event {
        AppEvent::Navigate(page) => {
            trace!(from = %state.current_page(), to = %page, "navigate");
            state.navigate(page);
            state
        }

        AppEvent::Redirect(page) => {
            trace!(from = %state.current_page(), to = %page, "redirect");
            state.redirect(page);
            state
        }

        AppEvent::Back => {
            state.go_back();
            state
        }

        AppEvent::SelectAndGoTo { selection, page } => {
            // Pointer and page change in the same step, so no render can
            // observe one without the other.
            trace!(?selection, to = %page, "select and navigate");
            state.selection.set(selection);
            state.navigate(page);
            state
        }

        AppEvent::ToggleFavorite(id) => {
            let added = state.toggle_favorite(id);
            debug!(service = %id, added, "favorite toggled");
            state
        }

        AppEvent::SetFilter { field, value } => {
            state.filters.set(field, value);
            state
        }

        AppEvent::OpenSearch => {
            state.ui.search = Some(state.filters.query.clone());
            state.ui.cursor = 0;
            state
        }

        AppEvent::SetUserRole(role) => {
            state.user_role = role;
            state
        }

        AppEvent::UpdateProfile(patch) => {
            state.profile.apply(patch);
            state
        }

        AppEvent::SetWallet(wallet) => {
            state.wallet = wallet;
            state
        }

        AppEvent::SetWalletTransactions(transactions) => {
            state.wallet_transactions = transactions;
            state
        }

        AppEvent::SetBookings(bookings) => {
            state.bookings = bookings;
            state
        }

        AppEvent::SetOrderChats(chats) => {
            state.order_chats = chats;
            state
        }

        AppEvent::AddNotification(draft) => {
            let id = state.push_notification(draft);
            debug!(notification = %id, "notification added");
            state
        }

        AppEvent::ShowBookingModal(show) => {
            state.ui.show_booking_modal = show;
            state
        }

        AppEvent::OpenLovePurchase => {
            state.ui.show_love_purchase = true;
            state
        }

        AppEvent::PremiumRequired => {
            state.ui.show_premium_modal = true;
            state
        }

        AppEvent::ViewLoaded { view, module } => {
            // The module itself is cached by the shell's registry; the state
            // bag only records failures for the status line.
            if let Err(error) = module {
                warn!(%view, %error, "view module failed to load");
                state.push_error(error.to_string());
            }
            state
        }

        AppEvent::Key(key) => handle_key(state, key).0,

        AppEvent::Tick(_) => {
            state.ui.spinner_frame = state.ui.spinner_frame.wrapping_add(1);
            state
        }

        AppEvent::Error { source, error } => {
            state.push_error(format!("{}: {}", source, error));
            state
        }

        AppEvent::Quit => {
            state.ui.should_quit = true;
            state
        }
    }
}
