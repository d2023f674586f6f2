use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::model::Theme;

/// Render the input overlay for `:` page prompt or `/` search mode.
/// Displayed at the bottom of the screen; the page prompt wins if both are set.
pub fn render_prompt_bar(frame: &mut Frame, state: &AppState) {
    if let Some(ref prompt) = state.ui.prompt {
        render_input(frame, ": ", prompt, " go to page or /path ");
    } else if let Some(ref search) = state.ui.search {
        render_input(frame, "/ ", search, " search title or seller, Enter keeps, Esc clears ");
    }
}

fn render_input(frame: &mut Frame, prefix: &'static str, input: &str, title: &'static str) {
    let area = frame.area();

    let prompt_area = Rect {
        x: area.x,
        y: area.height.saturating_sub(3),
        width: area.width,
        height: 3.min(area.height),
    };

    let text = Line::from(vec![
        Span::styled(prefix, Style::default().fg(Theme::INFO)),
        Span::styled(input.to_string(), Style::default().fg(Theme::TEXT)),
        Span::styled("█", Style::default().fg(Theme::ACTIVE_BORDER)),
    ]);

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACTIVE_BORDER))
                .title(title),
        )
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, prompt_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
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

    #[test]
    fn prompt_text_and_cursor_are_shown() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut state = AppState::new();
        state.ui.prompt = Some("wallet".to_string());

        terminal
            .draw(|frame| render_prompt_bar(frame, &state))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("wallet"));
        assert!(text.contains("█"));
    }

    #[test]
    fn search_text_is_shown_with_its_own_title() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut state = AppState::new();
        state.ui.search = Some("thai".to_string());

        terminal
            .draw(|frame| render_prompt_bar(frame, &state))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("/ thai█"));
        assert!(text.contains("search title or seller"));
        assert!(!text.contains("go to page"));
    }

    #[test]
    fn nothing_rendered_without_prompt() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let state = AppState::new();

        terminal
            .draw(|frame| render_prompt_bar(frame, &state))
            .unwrap();

        assert!(!buffer_text(&terminal).contains("go to page"));
    }
}
