use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::AppState;
use crate::model::{Theme, ViewKind};

/// Render footer status bar with keybinding hints.
/// The most recent error, if any, replaces the view-specific hints.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, view: ViewKind) {
    let footer = Paragraph::new(build_footer_text(state, view)).style(
        Style::default()
            .fg(Theme::TEXT)
            .bg(Theme::FOOTER_BG)
            .add_modifier(Modifier::DIM),
    );

    frame.render_widget(footer, area);
}

fn hint(spans: &mut Vec<Span<'static>>, key: &'static str, label: &'static str) {
    spans.push(Span::styled(key, Style::default().fg(Theme::INFO)));
    spans.push(Span::raw(label));
}

/// Pure function: build footer text for the active view.
fn build_footer_text(state: &AppState, view: ViewKind) -> Line<'static> {
    let mut spans = Vec::new();

    hint(&mut spans, "q", ":quit ");
    hint(&mut spans, "Esc", ":back ");
    hint(&mut spans, ":", ":go to ");

    if let Some(error) = state.errors.back() {
        spans.push(Span::styled(
            format!(" ! {}", error),
            Style::default().fg(Theme::ERROR),
        ));
        return Line::from(spans);
    }

    match view {
        ViewKind::Home | ViewKind::Catalog => {
            hint(&mut spans, "j/k", ":move ");
            hint(&mut spans, "Enter", ":open ");
            hint(&mut spans, "f", ":favorite ");
            hint(&mut spans, "/", ":search ");
        }
        ViewKind::Favorites => {
            hint(&mut spans, "j/k", ":move ");
            hint(&mut spans, "Enter", ":open ");
            hint(&mut spans, "f", ":favorite ");
        }
        ViewKind::ServiceDetail => {
            hint(&mut spans, "f", ":favorite ");
            hint(&mut spans, "b", ":book ");
            hint(&mut spans, "s", ":seller ");
        }
        ViewKind::Parties | ViewKind::OrganizerDashboard | ViewKind::MyOrders => {
            hint(&mut spans, "j/k", ":move ");
            hint(&mut spans, "Enter", ":open ");
        }
        ViewKind::PartyDetail => {
            hint(&mut spans, "j/k", ":move ");
            hint(&mut spans, "c", ":chat ");
        }
        ViewKind::Wallet => {
            hint(&mut spans, "l", ":buy LOVE ");
        }
        ViewKind::Swipe => {
            hint(&mut spans, "l", ":like ");
            hint(&mut spans, "n", ":skip ");
        }
        _ => {}
    }

    hint(&mut spans, "?", ":help");
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn render_footer_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        let state = AppState::new();
        terminal
            .draw(|frame| render_footer(frame, frame.area(), &state, ViewKind::Home))
            .unwrap();
    }

    #[test]
    fn catalog_hints_include_favorite() {
        let text = text(&build_footer_text(&AppState::new(), ViewKind::Catalog));
        assert!(text.contains("q:quit"));
        assert!(text.contains("f:favorite"));
        assert!(text.contains("?:help"));
        assert!(text.contains("/:search"));
    }

    #[test]
    fn swipe_hints() {
        let text = text(&build_footer_text(&AppState::new(), ViewKind::Swipe));
        assert!(text.contains("l:like"));
        assert!(!text.contains("favorite"));
    }

    #[test]
    fn latest_error_replaces_hints() {
        let mut state = AppState::new();
        state.push_error("first".into());
        state.push_error("view module Wallet failed".into());
        let text = text(&build_footer_text(&state, ViewKind::Catalog));
        assert!(text.contains("Wallet failed"));
        assert!(!text.contains("first"));
        assert!(!text.contains("favorite"));
    }
}
