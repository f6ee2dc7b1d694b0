//! Order summary screen

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use pkiosk_app::AppState;
use pkiosk_core::PageMode;

use crate::layout::centered;
use crate::theme::{self, palette};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    // Recomputed from the live config on every draw; the Layout screen
    // guarantees the range parses before letting the user get here.
    let cost = match state.cost() {
        Ok(cost) => cost,
        Err(_) => return,
    };

    let connection = state
        .connection
        .method
        .map(|m| m.label().to_string())
        .unwrap_or_default();
    let pages = match state.job.page_mode {
        PageMode::All => format!("All ({})", cost.pages),
        PageMode::Range => format!("Range ({})", cost.pages),
    };

    let rows: Vec<(&str, String)> = vec![
        ("Document", state.document.clone().unwrap_or_default()),
        ("Connection", connection),
        ("Paper Size", state.job.paper_size.label().to_string()),
        ("Orientation", state.job.orientation.label().to_string()),
        ("Color Mode", state.job.color_mode.label().to_string()),
        ("Pages", pages),
        ("Copies", state.job.copies.to_string()),
        (
            "Price per page",
            format!("{} pesos", cost.price_per_page),
        ),
    ];

    let mut lines = Vec::new();
    for (label, value) in rows {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{label:<16}"),
                Style::default().fg(palette::TEXT_SECONDARY),
            ),
            Span::styled(value, Style::default().fg(palette::TEXT_PRIMARY)),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Total Pages     ", Style::default().fg(palette::TEXT_SECONDARY)),
        Span::styled(format!("{} pages", cost.sheets()), theme::value()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Total Cost      ", Style::default().fg(palette::TEXT_SECONDARY)),
        Span::styled(
            format!("{} pesos", cost.total()),
            theme::title(),
        ),
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Proceed to Payment ", theme::value()),
        Span::styled("[Enter]", theme::muted()),
    ]));

    let target = centered(area, 44, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines), target);
}
