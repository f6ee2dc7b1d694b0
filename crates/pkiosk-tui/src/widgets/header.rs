//! Top bar: kiosk title and step breadcrumb

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use pkiosk_app::AppState;
use pkiosk_core::WizardStep;

use crate::theme::{self, palette};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::bordered().border_style(Style::default().fg(palette::BORDER_DIM));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(14)]).split(inner);

    let title = Line::from(vec![
        Span::styled("⚡ Print Kiosk Go", theme::title()),
        Span::styled("  ·  ", theme::muted()),
        Span::styled(state.step.title(), Style::default().fg(palette::TEXT_SECONDARY)),
    ]);
    frame.render_widget(Paragraph::new(title), chunks[0]);

    let breadcrumb = Line::from(Span::styled(
        format!("Step {}/{}", state.step.number(), WizardStep::total()),
        theme::muted(),
    ));
    frame.render_widget(
        Paragraph::new(breadcrumb).alignment(Alignment::Right),
        chunks[1],
    );
}
