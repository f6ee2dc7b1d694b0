//! Transfer method selection screen

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use pkiosk_app::AppState;
use pkiosk_core::ConnectionMethod;

use crate::layout::centered;
use crate::theme::{self, palette};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::styled(
            "How would you like to send your document?",
            Style::default().fg(palette::TEXT_SECONDARY),
        ),
        Line::raw(""),
    ];

    for (i, method) in ConnectionMethod::ALL.iter().enumerate() {
        let is_cursor = i == state.ui.connection_cursor;
        let (marker, label_style) = if is_cursor {
            ("▸ ", theme::selected())
        } else {
            ("  ", Style::default().fg(palette::TEXT_PRIMARY))
        };
        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{:<14}", method.label()), label_style),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(method.description(), theme::muted()),
        ]));
        lines.push(Line::raw(""));
    }

    let target = centered(area, 48, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines), target);
}
