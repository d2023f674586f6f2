use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{Theme, ViewKind};

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub fn spinner_glyph(frame_index: usize) -> &'static str {
    SPINNER[frame_index % SPINNER.len()]
}

/// Placeholder shown while a view module is not ready.
pub fn render_loading(frame: &mut Frame, area: Rect, view: ViewKind, frame_index: usize) {
    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(spinner_glyph(frame_index), Style::default().fg(Theme::ACCENT)),
            Span::styled(
                format!(" Loading {}…", view.title()),
                Style::default().fg(Theme::MUTED_TEXT),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::PANEL_BORDER)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
