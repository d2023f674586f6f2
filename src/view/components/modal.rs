use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;
use crate::app::AppState;
use crate::model::{Currency, Theme};

/// Render whichever modal is open. Premium wins over the others.
pub fn render_modal(frame: &mut Frame, state: &AppState) {
    let (title, body) = if state.ui.show_premium_modal {
        (
            " Premium ",
            vec![
                Line::from(Span::styled(
                    "This section is for premium members.",
                    Style::default().fg(Theme::ACCENT_GOLD).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from("Upgrade from your wallet to unlock it."),
            ],
        )
    } else if state.ui.show_love_purchase {
        (
            " Buy LOVE ",
            vec![
                Line::from(format!(
                    "Balance: {:.2} {}",
                    state.wallet.balance(Currency::Love),
                    Currency::Love.symbol()
                )),
                Line::from(""),
                Line::from("Top up LOVE tokens to send gifts and boost your profile."),
            ],
        )
    } else if state.ui.show_booking_modal {
        let service = state
            .selection
            .service
            .and_then(|id| state.catalog_items.iter().find(|item| item.id == id));
        let body = match service {
            Some(item) => vec![
                Line::from(Span::styled(
                    item.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("{} · {}", item.seller, item.price)),
                Line::from(""),
                Line::from("Request sent. The seller will confirm the booking."),
            ],
            None => vec![Line::from("No service selected.")],
        };
        (" Booking ", body)
    } else {
        return;
    };

    let area = centered_rect(50, 40, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(body)
        .block(
            Block::default()
                .title(title)
                .title_bottom(" Enter/Esc to close ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACTIVE_BORDER)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(Theme::SURFACE).fg(Theme::TEXT));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render_modal(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn premium_modal_renders() {
        let mut state = AppState::new();
        state.ui.show_premium_modal = true;
        assert!(draw(&state).contains("Premium"));
    }

    #[test]
    fn no_modal_draws_nothing() {
        let text = draw(&AppState::new());
        assert!(text.trim().is_empty());
    }

    #[test]
    fn booking_without_service_says_so() {
        let mut state = AppState::new();
        state.ui.show_booking_modal = true;
        assert!(draw(&state).contains("No service selected"));
    }
}
