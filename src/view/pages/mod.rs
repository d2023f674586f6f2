//! Page renderers. Each one reads only its own prop slice and acts only
//! through the handles in it.

pub mod account;
pub mod catalog;
pub mod info;
pub mod orders;
pub mod parties;

use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::UiState;
use crate::model::{Theme, ViewKind};
use crate::registry::ViewModule;
use crate::router::ViewProps;

/// The bundled implementation of every view.
#[derive(Debug, Clone, Copy)]
pub struct PageView {
    kind: ViewKind,
}

impl PageView {
    pub fn new(kind: ViewKind) -> Self {
        Self { kind }
    }
}

impl ViewModule for PageView {
    fn kind(&self) -> ViewKind {
        self.kind
    }

    fn render(&self, frame: &mut Frame, area: Rect, props: &ViewProps, ui: &UiState) {
        match props {
            ViewProps::Home(p) => catalog::render_home(frame, area, p, ui),
            ViewProps::Catalog(p) => catalog::render_catalog(frame, area, p, ui),
            ViewProps::Favorites(p) => catalog::render_favorites(frame, area, p, ui),
            ViewProps::ServiceDetail(p) => catalog::render_service_detail(frame, area, p),
            ViewProps::Profile(p) => account::render_profile(frame, area, p, ui),
            ViewProps::Register(_) => account::render_auth(frame, area, ViewKind::Register),
            ViewProps::Login(_) => account::render_auth(frame, area, ViewKind::Login),
            ViewProps::Wallet(p) => account::render_wallet(frame, area, p),
            ViewProps::SellerProfile(p) => account::render_seller(frame, area, p),
            ViewProps::MyAds(p) => account::render_my_ads(frame, area, p),
            ViewProps::Parties(p) => parties::render_parties(frame, area, p, ui),
            ViewProps::PartyDetail(p) => parties::render_party_detail(frame, area, p, ui),
            ViewProps::PartyChat(p) => parties::render_party_chat(frame, area, p),
            ViewProps::OrganizerDashboard(p) => parties::render_dashboard(frame, area, p, ui),
            ViewProps::Bookings(p) => orders::render_bookings(frame, area, p, ui),
            ViewProps::MyOrders(p) => orders::render_my_orders(frame, area, p, ui),
            ViewProps::OrderChat(p) => orders::render_order_chat(frame, area, p),
            ViewProps::CategoryProviders(p) => orders::render_category(frame, area, p, ui),
            ViewProps::Admin(_) => info::render_admin(frame, area),
            ViewProps::Swipe(_) => info::render_swipe(frame, area),
            ViewProps::Search(_)
            | ViewProps::Messages(_)
            | ViewProps::Rules(_)
            | ViewProps::Work(_)
            | ViewProps::Referral(_)
            | ViewProps::Raffle(_)
            | ViewProps::Dating(_)
            | ViewProps::Invitations(_)
            | ViewProps::OnlineSearch(_)
            | ViewProps::UserGuide(_)
            | ViewProps::Matches(_) => info::render_basic(frame, area, props.kind()),
        }
    }

    fn handle_key(&self, props: &ViewProps, ui: &UiState, key: KeyEvent) -> bool {
        match props {
            ViewProps::Home(p) => catalog::home_key(p, ui, key),
            ViewProps::Catalog(p) => catalog::catalog_key(p, ui, key),
            ViewProps::Favorites(p) => catalog::favorites_key(p, ui, key),
            ViewProps::ServiceDetail(p) => catalog::service_key(p, key),
            ViewProps::Profile(p) => account::profile_key(p, key),
            ViewProps::Register(p) | ViewProps::Login(p) => account::auth_key(p, key),
            ViewProps::Wallet(p) => account::wallet_key(p, key),
            ViewProps::MyAds(p) => account::my_ads_key(p, key),
            ViewProps::Parties(p) => parties::parties_key(p, ui, key),
            ViewProps::PartyDetail(p) => parties::party_detail_key(p, ui, key),
            ViewProps::PartyChat(p) => parties::party_chat_key(p, key),
            ViewProps::OrganizerDashboard(p) => parties::dashboard_key(p, ui, key),
            ViewProps::Bookings(p) => orders::bookings_key(p, ui, key),
            ViewProps::MyOrders(p) => orders::my_orders_key(p, ui, key),
            ViewProps::OrderChat(p) => orders::order_chat_key(p, key),
            ViewProps::CategoryProviders(p) => orders::category_key(p, key),
            ViewProps::Admin(p) => info::admin_key(p, key),
            ViewProps::Swipe(p) => info::swipe_key(p, key),
            ViewProps::SellerProfile(_) => false,
            ViewProps::Search(p)
            | ViewProps::Messages(p)
            | ViewProps::Rules(p)
            | ViewProps::Work(p)
            | ViewProps::Referral(p)
            | ViewProps::Raffle(p)
            | ViewProps::Dating(p)
            | ViewProps::Invitations(p)
            | ViewProps::OnlineSearch(p)
            | ViewProps::UserGuide(p)
            | ViewProps::Matches(p) => info::basic_key(p, props.kind(), key),
        }
    }
}

/// Host cursor clamped to a list of `len` rows
pub(crate) fn cursor(ui: &UiState, len: usize) -> Option<usize> {
    (len > 0).then(|| ui.cursor.min(len - 1))
}

pub(crate) fn panel(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::PANEL_BORDER))
        .title(format!(" {} ", title.into()))
}

pub(crate) fn render_list(
    frame: &mut Frame,
    area: Rect,
    title: impl Into<String>,
    items: Vec<ListItem<'static>>,
    empty: &'static str,
    ui: &UiState,
) {
    if items.is_empty() {
        let hint = Line::styled(empty, Style::default().fg(Theme::MUTED_TEXT));
        render_text(frame, area, title, vec![hint]);
        return;
    }
    let mut list_state = ListState::default().with_selected(cursor(ui, items.len()));
    let list = List::new(items)
        .block(panel(title))
        .highlight_style(Style::default().bg(Theme::SELECTION_BG))
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, area, &mut list_state);
}

pub(crate) fn render_text(
    frame: &mut Frame,
    area: Rect,
    title: impl Into<String>,
    lines: Vec<Line<'static>>,
) {
    let paragraph = Paragraph::new(lines)
        .block(panel(title))
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Theme::TEXT));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::app::AppState;
    use crate::event::AppEvent;
    use crate::model::Directory;
    use crate::router::{Dispatcher, Router};
    use tokio::sync::mpsc::UnboundedReceiver;

    pub fn route(
        state: &AppState,
        directory: &Directory,
    ) -> (ViewProps, UnboundedReceiver<AppEvent>) {
        let (dispatcher, rx) = Dispatcher::channel();
        let routed = Router::new().route(state, directory, &dispatcher);
        (routed.props, rx)
    }

    pub fn draw(props: &ViewProps, ui: &UiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let view = PageView::new(props.kind());
        terminal
            .draw(|frame| view.render(frame, frame.area(), props, ui))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer.cell((x, y)).unwrap().symbol())
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn drain(rx: &mut UnboundedReceiver<AppEvent>) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }
}
