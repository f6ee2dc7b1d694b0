//! Screen widgets, one module per wizard step, plus shared pieces

pub mod complete;
pub mod connection;
pub mod header;
pub mod layout_form;
pub mod payment;
pub mod qr;
pub mod start;
pub mod status_bar;
pub mod summary;
pub mod upload;

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use pkiosk_core::SourceEntry;

use crate::theme::{self, palette};

/// Braille spinner frames for the waiting panes.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// Truncate a string to `max_width` terminal columns, appending `…` when
/// anything was cut.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = UnicodeWidthStr::width(c.to_string().as_str());
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Render a device/file listing with a cursor row.
///
/// Folders render dimmed (they cannot be selected); the cursor row gets
/// the selection style, with a hollow marker on inert rows.
pub fn listing_lines(
    entries: &[SourceEntry],
    cursor: usize,
    max_width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        let is_cursor = i == cursor;
        let name = truncate_with_ellipsis(entry.name(), max_width.saturating_sub(4));

        let name_style = if is_cursor && entry.is_selectable() {
            theme::selected()
        } else if is_cursor {
            theme::muted().bg(palette::ACCENT_DIM)
        } else if entry.is_selectable() {
            ratatui::style::Style::default().fg(palette::TEXT_PRIMARY)
        } else {
            theme::muted()
        };

        let marker = if is_cursor { "▸ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), name_style),
            Span::styled(name, name_style),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(entry.detail(), theme::muted()),
        ]));
    }
    lines
}
