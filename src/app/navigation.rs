use crossterm::event::{KeyCode, KeyEvent};

use crate::app::AppState;
use crate::model::PageId;

/// Whether the host consumed a key or it should go on to the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Consumed,
    Ignored,
}

/// Number-row shortcuts to the main sections
pub const SHORTCUTS: [(char, PageId); 10] = [
    ('1', PageId::Home),
    ('2', PageId::Catalog),
    ('3', PageId::Favorites),
    ('4', PageId::Parties),
    ('5', PageId::Wallet),
    ('6', PageId::Bookings),
    ('7', PageId::MyOrders),
    ('8', PageId::Profile),
    ('9', PageId::Messages),
    ('0', PageId::Swipe),
];

/// Pure host-level key handling.
/// Takes current state + keyboard event, returns new state and whether the
/// key was consumed. Keys the host ignores belong to the active view.
pub fn handle_key(state: AppState, key: KeyEvent) -> (AppState, KeyOutcome) {
    // Help overlay has priority
    if state.ui.show_help {
        return (handle_help_key(state, key), KeyOutcome::Consumed);
    }

    // Open modals swallow input until dismissed
    if state.ui.has_modal() {
        return (handle_modal_key(state, key), KeyOutcome::Consumed);
    }

    // Page prompt has priority over normal navigation
    if state.ui.prompt.is_some() {
        return (handle_prompt_key(state, key), KeyOutcome::Consumed);
    }

    if state.ui.search.is_some() {
        return (handle_search_key(state, key), KeyOutcome::Consumed);
    }

    match key.code {
        KeyCode::Char('q') => {
            let mut state = state;
            state.ui.should_quit = true;
            (state, KeyOutcome::Consumed)
        }
        KeyCode::Char(c) if shortcut(c).is_some() => {
            let mut state = state;
            if let Some(page) = shortcut(c) {
                state.navigate(page);
            }
            (state, KeyOutcome::Consumed)
        }
        KeyCode::Char('j') | KeyCode::Down => (cursor_down(state), KeyOutcome::Consumed),
        KeyCode::Char('k') | KeyCode::Up => (cursor_up(state), KeyOutcome::Consumed),
        KeyCode::Esc => {
            let mut state = state;
            state.go_back();
            (state, KeyOutcome::Consumed)
        }
        KeyCode::Char(':') => (start_prompt(state), KeyOutcome::Consumed),
        KeyCode::Char('?') => (toggle_help(state), KeyOutcome::Consumed),
        _ => (state, KeyOutcome::Ignored),
    }
}

fn shortcut(c: char) -> Option<PageId> {
    SHORTCUTS
        .iter()
        .find(|(key, _)| *key == c)
        .map(|(_, page)| *page)
}

/// Handle key input when help overlay is shown.
/// Any key dismisses help.
fn handle_help_key(mut state: AppState, _key: KeyEvent) -> AppState {
    state.ui.show_help = false;
    state
}

/// Esc or Enter dismisses every open modal.
fn handle_modal_key(mut state: AppState, key: KeyEvent) -> AppState {
    if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
        state.ui.close_modals();
    }
    state
}

/// Handle key input when the page prompt is active.
/// Enter navigates to the typed page or path; unknown input lands on home.
fn handle_prompt_key(mut state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Esc => {
            state.ui.prompt = None;
        }
        KeyCode::Enter => {
            if let Some(input) = state.ui.prompt.take() {
                let input = input.trim();
                let page = if input.starts_with('/') {
                    PageId::from_path(input)
                } else {
                    PageId::resolve(input)
                };
                state.navigate(page);
            }
        }
        KeyCode::Backspace => {
            if let Some(ref mut prompt) = state.ui.prompt {
                prompt.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(ref mut prompt) = state.ui.prompt {
                prompt.push(c);
            }
        }
        _ => {}
    }
    state
}

/// Handle key input while the search query is being edited.
/// Every edit applies to the query at once; Enter keeps it, Esc clears it.
fn handle_search_key(mut state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Esc => {
            state.ui.search = None;
            state.filters.query.clear();
        }
        KeyCode::Enter => {
            state.ui.search = None;
        }
        KeyCode::Backspace => {
            if let Some(ref mut search) = state.ui.search {
                search.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(ref mut search) = state.ui.search {
                search.push(c);
            }
        }
        _ => return state,
    }
    if let Some(ref search) = state.ui.search {
        state.filters.query.clone_from(search);
    }
    state.ui.cursor = 0;
    state
}

/// Views clamp the cursor to their own list length when rendering.
fn cursor_down(mut state: AppState) -> AppState {
    state.ui.cursor = state.ui.cursor.saturating_add(1);
    state
}

fn cursor_up(mut state: AppState) -> AppState {
    state.ui.cursor = state.ui.cursor.saturating_sub(1);
    state
}

/// Start page prompt mode.
fn start_prompt(mut state: AppState) -> AppState {
    state.ui.prompt = Some(String::new());
    state
}

/// Toggle help overlay.
fn toggle_help(mut state: AppState) -> AppState {
    state.ui.show_help = !state.ui.show_help;
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn press(state: AppState, code: KeyCode) -> AppState {
        handle_key(state, key(code)).0
    }

    #[test]
    fn quit_key_sets_should_quit() {
        let state = press(AppState::new(), KeyCode::Char('q'));
        assert!(state.ui.should_quit);
    }

    #[test]
    fn shortcut_keys_navigate() {
        let state = press(AppState::new(), KeyCode::Char('4'));
        assert_eq!(state.current_page(), PageId::Parties);
        let state = press(state, KeyCode::Char('1'));
        assert_eq!(state.current_page(), PageId::Home);
    }

    #[test]
    fn esc_goes_back() {
        let state = press(AppState::new(), KeyCode::Char('5'));
        let state = press(state, KeyCode::Esc);
        assert_eq!(state.current_page(), PageId::Home);
    }

    #[test]
    fn cursor_moves_and_saturates() {
        let state = press(AppState::new(), KeyCode::Char('k'));
        assert_eq!(state.ui.cursor, 0);
        let state = press(state, KeyCode::Char('j'));
        let state = press(state, KeyCode::Down);
        assert_eq!(state.ui.cursor, 2);
        let state = press(state, KeyCode::Up);
        assert_eq!(state.ui.cursor, 1);
    }

    #[test]
    fn unknown_keys_are_left_for_the_view() {
        let (state, outcome) = handle_key(AppState::new(), key(KeyCode::Enter));
        assert_eq!(outcome, KeyOutcome::Ignored);
        assert_eq!(state.current_page(), PageId::Home);
        let (_, outcome) = handle_key(AppState::new(), key(KeyCode::Char('f')));
        assert_eq!(outcome, KeyOutcome::Ignored);
    }

    #[test]
    fn prompt_navigates_to_typed_page() {
        let mut state = press(AppState::new(), KeyCode::Char(':'));
        assert_eq!(state.ui.prompt.as_deref(), Some(""));
        for c in "wallet".chars() {
            state = press(state, KeyCode::Char(c));
        }
        let state = press(state, KeyCode::Enter);
        assert!(state.ui.prompt.is_none());
        assert_eq!(state.current_page(), PageId::Wallet);
    }

    #[test]
    fn prompt_accepts_paths() {
        let mut state = press(AppState::new(), KeyCode::Char(':'));
        for c in "/my-orders".chars() {
            state = press(state, KeyCode::Char(c));
        }
        let state = press(state, KeyCode::Enter);
        assert_eq!(state.current_page(), PageId::MyOrders);
    }

    #[test]
    fn prompt_with_unknown_page_lands_home() {
        let mut state = AppState::with_page(PageId::Catalog);
        state = press(state, KeyCode::Char(':'));
        for c in "agency-dashboard".chars() {
            state = press(state, KeyCode::Char(c));
        }
        let state = press(state, KeyCode::Enter);
        assert_eq!(state.current_page(), PageId::Home);
    }

    #[test]
    fn prompt_keys_do_not_trigger_shortcuts() {
        let mut state = press(AppState::new(), KeyCode::Char(':'));
        state = press(state, KeyCode::Char('q'));
        state = press(state, KeyCode::Char('2'));
        assert!(!state.ui.should_quit);
        assert_eq!(state.current_page(), PageId::Home);
        state = press(state, KeyCode::Backspace);
        assert_eq!(state.ui.prompt.as_deref(), Some("q"));
        let state = press(state, KeyCode::Esc);
        assert!(state.ui.prompt.is_none());
    }

    fn searching(query: &str) -> AppState {
        let mut state = AppState::with_page(PageId::Catalog);
        state.filters.query = query.to_string();
        state.ui.search = Some(query.to_string());
        state
    }

    #[test]
    fn search_edits_apply_to_the_query_at_once() {
        let mut state = searching("");
        state.ui.cursor = 3;
        for c in "thai".chars() {
            state = press(state, KeyCode::Char(c));
        }
        assert_eq!(state.filters.query, "thai");
        assert_eq!(state.ui.cursor, 0);
        let state = press(state, KeyCode::Backspace);
        assert_eq!(state.filters.query, "tha");
        assert_eq!(state.ui.search.as_deref(), Some("tha"));
    }

    #[test]
    fn search_keys_do_not_trigger_shortcuts() {
        let mut state = searching("");
        for c in "q2:".chars() {
            state = press(state, KeyCode::Char(c));
        }
        assert!(!state.ui.should_quit);
        assert!(state.ui.prompt.is_none());
        assert_eq!(state.current_page(), PageId::Catalog);
        assert_eq!(state.filters.query, "q2:");
    }

    #[test]
    fn search_enter_keeps_query_and_esc_clears_it() {
        let state = press(searching("spa"), KeyCode::Enter);
        assert!(state.ui.search.is_none());
        assert_eq!(state.filters.query, "spa");

        let state = press(searching("spa"), KeyCode::Esc);
        assert!(state.ui.search.is_none());
        assert!(state.filters.query.is_empty());
        assert_eq!(state.current_page(), PageId::Catalog);
    }

    #[test]
    fn help_overlay_swallows_next_key() {
        let state = press(AppState::new(), KeyCode::Char('?'));
        assert!(state.ui.show_help);
        let state = press(state, KeyCode::Char('q'));
        assert!(!state.ui.show_help);
        assert!(!state.ui.should_quit);
    }

    #[test]
    fn modal_blocks_navigation_until_dismissed() {
        let mut state = AppState::new();
        state.ui.show_premium_modal = true;
        let state = press(state, KeyCode::Char('2'));
        assert_eq!(state.current_page(), PageId::Home);
        assert!(state.ui.show_premium_modal);
        let state = press(state, KeyCode::Esc);
        assert!(!state.ui.show_premium_modal);
    }
}
