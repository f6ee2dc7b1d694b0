//! Welcome screen

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
        Line::styled("🖨", Style::default().fg(palette::ACCENT)),
        Line::raw(""),
        Line::styled("Print Kiosk Go", theme::title()),
        Line::styled(
            "Fast & Easy Printing Service",
            Style::default().fg(palette::TEXT_SECONDARY),
        ),
        Line::raw(""),
        Line::from(vec![
            Span::styled("▶ Start Printing ", theme::value()),
            Span::styled("[Enter]", theme::muted()),
        ]),
    ];

    let target = centered(area, 40, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}
