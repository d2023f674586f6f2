use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::AppState;
use crate::model::{Theme, UserRole, ViewKind};

/// Render header bar.
/// Shows: app name, active view, session role, favorites, unread notifications.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState, view: ViewKind) {
    let header = Paragraph::new(build_header_text(state, view)).style(
        Style::default()
            .fg(Theme::TEXT)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_widget(header, area);
}

/// Pure function: build header text from state.
fn build_header_text(state: &AppState, view: ViewKind) -> Line<'static> {
    let role = match state.user_role {
        Some(UserRole::Buyer) => format!("{} (buyer)", state.profile.display_name()),
        Some(UserRole::Seller) => format!("{} (seller)", state.profile.display_name()),
        None => "guest".to_string(),
    };

    let mut spans = vec![
        Span::styled("agora", Style::default().fg(Theme::ACCENT)),
        Span::raw(" "),
        Span::styled(format!("[{}]", view.title()), Style::default().fg(Theme::INFO)),
        Span::styled(format!("  {}", role), Style::default().fg(Theme::MUTED_TEXT)),
    ];

    if !state.favorites.is_empty() {
        spans.push(Span::styled(
            format!("  ♥ {}", state.favorites.len()),
            Style::default().fg(Theme::FAVORITE),
        ));
    }

    let unread = state.unread_notifications();
    if unread > 0 {
        spans.push(Span::styled(
            format!("  {} new", unread),
            Style::default().fg(Theme::ACCENT_GOLD),
        ));
        if let Some(latest) = state.notifications.front() {
            spans.push(Span::styled(
                format!(": {}", latest.title),
                Style::default().fg(Theme::notification_color(latest.kind)),
            ));
        }
    }

    Line::from(spans)
}
