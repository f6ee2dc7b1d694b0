//! Completion screen

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use pkiosk_app::AppState;

use crate::layout::centered;
use crate::theme::{self, palette};

pub fn render(frame: &mut Frame, area: Rect, _state: &AppState) {
    let lines = vec![
        Line::styled("✔", Style::default().fg(palette::STATUS_GREEN)),
        Line::raw(""),
        Line::styled("Printing Complete!", theme::title()),
        Line::styled(
            "Your documents are ready",
            Style::default().fg(palette::TEXT_SECONDARY),
        ),
        Line::styled(
            "Please collect them from the output tray",
            theme::muted(),
        ),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Print Another Document ", theme::value()),
            Span::styled("[Enter]", theme::muted()),
        ]),
    ];

    let target = centered(area, 48, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}
