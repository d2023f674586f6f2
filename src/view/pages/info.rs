use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    Frame,
};

use super::render_text;
use crate::model::{NotificationKind, PageId, Theme, ViewKind};
use crate::router::props::{AdminProps, BasicProps, SwipeProps};

/// Body text and the page Enter leads to, for views that only navigate.
fn basic_content(view: ViewKind) -> (&'static [&'static str], PageId) {
    match view {
        ViewKind::Search => (
            &[
                "Search by name, city or category.",
                "Enter: open the catalog with the current filters",
            ],
            PageId::Catalog,
        ),
        ViewKind::Messages => (
            &["Your conversations appear here.", "Enter: my orders"],
            PageId::MyOrders,
        ),
        ViewKind::Rules => (
            &[
                "Be respectful. Meet in safe places.",
                "Payments go through the wallet only.",
                "Enter: user guide",
            ],
            PageId::UserGuide,
        ),
        ViewKind::Work => (
            &["Offer your services as a seller.", "Enter: register"],
            PageId::Register,
        ),
        ViewKind::Referral => (
            &["Invite friends and earn LOVE for every sign-up.", "Enter: wallet"],
            PageId::Wallet,
        ),
        ViewKind::Raffle => (
            &["Monthly raffle for active members.", "Enter: wallet"],
            PageId::Wallet,
        ),
        ViewKind::Dating => (&["Find people nearby.", "Enter: start swiping"], PageId::Swipe),
        ViewKind::Invitations => (
            &["Invitations you received.", "Enter: parties"],
            PageId::Parties,
        ),
        ViewKind::OnlineSearch => (
            &["Sellers online right now.", "Enter: catalog"],
            PageId::Catalog,
        ),
        ViewKind::UserGuide => (
            &[
                "1-0 jump between sections, : opens any page by name.",
                "Esc goes back, ? shows every key.",
                "Enter: rules",
            ],
            PageId::Rules,
        ),
        ViewKind::Matches => (&["People who liked you back.", "Enter: messages"], PageId::Messages),
        _ => (&[], PageId::Home),
    }
}

pub fn render_basic(frame: &mut Frame, area: Rect, view: ViewKind) {
    let (body, _) = basic_content(view);
    let mut lines = vec![
        Line::styled(
            view.title(),
            Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    lines.extend(body.iter().map(|line| Line::from(*line)));
    render_text(frame, area, view.title(), lines);
}

pub fn basic_key(props: &BasicProps, view: ViewKind, key: KeyEvent) -> bool {
    if key.code == KeyCode::Enter {
        props.go_to.call(basic_content(view).1);
        return true;
    }
    false
}

pub fn render_admin(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            "Admin panel",
            Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("n: broadcast a system notification"),
        Line::from("Enter: back home"),
    ];
    render_text(frame, area, "Admin", lines);
}

pub fn admin_key(props: &AdminProps, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('n') => {
            props.add_notification.call(
                NotificationKind::System,
                "Maintenance",
                "Scheduled maintenance tonight at 03:00",
            );
            true
        }
        KeyCode::Enter => {
            props.go_to.call(PageId::Home);
            true
        }
        _ => false,
    }
}

pub fn render_swipe(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            "Someone nearby",
            Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("l: like   n: skip"),
    ];
    render_text(frame, area, "Swipe", lines);
}

/// A like is treated as a mutual match
pub fn swipe_key(props: &SwipeProps, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('l') => {
            props.on_match.call();
            true
        }
        KeyCode::Char('n') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::event::AppEvent;
    use crate::model::Directory;
    use crate::router::ViewProps;
    use crate::view::pages::test_support::{drain, draw, route};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn every_basic_view_has_content() {
        for view in [
            ViewKind::Search,
            ViewKind::Messages,
            ViewKind::Rules,
            ViewKind::Work,
            ViewKind::Referral,
            ViewKind::Raffle,
            ViewKind::Dating,
            ViewKind::Invitations,
            ViewKind::OnlineSearch,
            ViewKind::UserGuide,
            ViewKind::Matches,
        ] {
            let (body, target) = basic_content(view);
            assert!(!body.is_empty(), "{view}");
            assert_ne!(target, PageId::Home, "{view}");
        }
    }

    #[test]
    fn swipe_like_raises_match_notification() {
        let state = AppState::with_page(PageId::Swipe);
        let (props, mut rx) = route(&state, &Directory::default());
        let ViewProps::Swipe(props) = props else {
            panic!("expected swipe");
        };
        assert!(swipe_key(&props, key(KeyCode::Char('l'))));
        assert!(swipe_key(&props, key(KeyCode::Char('n'))));
        match drain(&mut rx).as_slice() {
            [AppEvent::AddNotification(draft)] => assert_eq!(draft.title, "New match"),
            other => panic!("unexpected events {other:?}"),
        }
    }

    #[test]
    fn rules_enter_goes_to_guide() {
        let state = AppState::with_page(PageId::Rules);
        let (props, mut rx) = route(&state, &Directory::default());
        assert!(draw(&props, &state.ui).contains("Payments go through the wallet"));
        let ViewProps::Rules(basic) = &props else {
            panic!("expected rules");
        };
        assert!(basic_key(basic, props.kind(), key(KeyCode::Enter)));
        assert!(matches!(
            drain(&mut rx).as_slice(),
            [AppEvent::Navigate(PageId::UserGuide)]
        ));
    }
}
