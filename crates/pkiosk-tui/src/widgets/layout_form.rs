//! Print settings form

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use pkiosk_app::{AppState, LayoutField};
use pkiosk_core::{PageMode, DOCUMENT_PAGES};

use crate::layout::centered;
use crate::theme::{self, palette};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Document: ", Style::default().fg(palette::TEXT_SECONDARY)),
            Span::styled(
                state.document.clone().unwrap_or_default(),
                theme::value(),
            ),
        ]),
        Line::raw(""),
    ];

    for field in LayoutField::ALL {
        let focused = state.ui.layout_field == field;
        lines.push(field_line(state, field, focused));
        // Inline range text and validation error under the Pages field
        if field == LayoutField::Pages && state.job.page_mode == PageMode::Range {
            lines.push(range_line(state, focused));
            if let Some(error) = &state.ui.range_error {
                lines.push(Line::from(vec![
                    Span::raw("      "),
                    Span::styled(error.to_string(), Style::default().fg(palette::STATUS_RED)),
                ]));
            }
        }
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Continue to Payment ", theme::value()),
        Span::styled("[Enter]", theme::muted()),
    ]));

    let target = centered(area, 56, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines), target);
}

fn field_line(state: &AppState, field: LayoutField, focused: bool) -> Line<'static> {
    let marker = if focused { "▸ " } else { "  " };
    let label_style = if focused {
        theme::title()
    } else {
        Style::default().fg(palette::TEXT_SECONDARY)
    };
    let value_style = if focused {
        theme::selected()
    } else {
        Style::default().fg(palette::TEXT_PRIMARY)
    };

    let value = field_value(state, field);
    let mut spans = vec![
        Span::styled(marker.to_string(), label_style),
        Span::styled(format!("{:<18}", field.label()), label_style),
    ];
    if focused {
        spans.push(Span::styled("◂ ", theme::muted()));
        spans.push(Span::styled(value, value_style));
        spans.push(Span::styled(" ▸", theme::muted()));
    } else {
        spans.push(Span::styled(value, value_style));
    }
    Line::from(spans)
}

fn field_value(state: &AppState, field: LayoutField) -> String {
    match field {
        LayoutField::PaperSize => format!(
            "{} ({})",
            state.job.paper_size.label(),
            state.job.paper_size.dimensions()
        ),
        LayoutField::Orientation => state.job.orientation.label().to_string(),
        LayoutField::ColorMode => {
            let price = state.prices().per_page(state.job.color_mode);
            format!("{} · {} pesos/page", state.job.color_mode.label(), price)
        }
        LayoutField::Pages => match state.job.page_mode {
            PageMode::All => format!("All Pages ({DOCUMENT_PAGES} pages)"),
            PageMode::Range => "Page Range".to_string(),
        },
        LayoutField::Copies => format!("− {} +", state.job.copies),
    }
}

fn range_line(state: &AppState, focused: bool) -> Line<'static> {
    let mut spans = vec![
        Span::raw("      "),
        Span::styled("e.g. 1-5, 8, 10: ", theme::muted()),
        Span::styled(state.job.page_range.clone(), theme::value()),
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(palette::ACCENT)));
    }
    Line::from(spans)
}
