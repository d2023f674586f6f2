use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::app::navigation::SHORTCUTS;
use crate::model::Theme;

/// Render the help overlay as a centered popup.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(60, 80, frame.area());

    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(build_help_text())
        .block(
            Block::default()
                .title(" Help - any key to close ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACTIVE_BORDER)),
        )
        .style(Style::default().bg(Theme::BACKGROUND).fg(Theme::TEXT));

    frame.render_widget(paragraph, popup_area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Theme::INFO).add_modifier(Modifier::BOLD),
    ))
}

/// Build help text with keybindings grouped by category.
fn build_help_text() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(""), section("SECTIONS")];
    lines.extend(
        SHORTCUTS
            .iter()
            .map(|(key, page)| Line::from(format!("  {:<11} - {}", key, page))),
    );
    lines.extend([
        Line::from(""),
        section("NAVIGATION"),
        Line::from("  :           - Go to a page by name or /path"),
        Line::from("  Esc         - Back to the previous page"),
        Line::from("  j / k       - Move down / up"),
        Line::from("  Enter       - Open the highlighted entry"),
        Line::from(""),
        section("CATALOG"),
        Line::from("  /           - Search by title or seller"),
        Line::from("  c / p / l   - Next category / price band / location"),
        Line::from("  o           - Sort order (catalog)"),
        Line::from("  x           - Clear every filter"),
        Line::from(""),
        section("GENERAL"),
        Line::from("  ?           - Toggle this help"),
        Line::from("  q           - Quit"),
    ]);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn help_lists_every_shortcut() {
        let text: String = build_help_text()
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect::<Vec<_>>()
            .join("\n");
        for (_, page) in SHORTCUTS {
            assert!(text.contains(page.as_str()), "missing {page}");
        }
        assert!(text.contains("Esc"));
    }

    #[test]
    fn render_help_does_not_panic_on_small_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal.draw(render_help_overlay).unwrap();
    }
}
