//! Bottom bar: contextual key hints

use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

use pkiosk_app::AppState;
use pkiosk_core::{ConnectionState, PageMode, PaymentMethod, WizardStep};

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = hints_for(state);
    frame.render_widget(
        Paragraph::new(Line::styled(format!(" {hints}"), theme::muted())),
        area,
    );
}

fn hints_for(state: &AppState) -> String {
    match state.step {
        WizardStep::Start => "enter start printing · q quit".to_string(),
        WizardStep::Connection => "↑/↓ choose · enter select · esc back · q quit".to_string(),
        WizardStep::Upload => match state.connection.state {
            ConnectionState::Scanning => {
                "↑/↓ choose device · enter pair · esc back".to_string()
            }
            ConnectionState::Ready => "↑/↓ choose file · enter select · esc back".to_string(),
            ConnectionState::Connected => {
                "type file name · enter send · ctrl+u clear · esc back".to_string()
            }
            _ => "esc back".to_string(),
        },
        WizardStep::Layout => {
            if state.job.page_mode == PageMode::Range {
                "↑/↓ field · ←/→ change · type range · enter continue · esc back".to_string()
            } else {
                "↑/↓ field · ←/→ change · enter continue · esc back".to_string()
            }
        }
        WizardStep::Summary => "enter proceed to payment · esc back".to_string(),
        WizardStep::Payment => match state.payment.method {
            PaymentMethod::Cash => {
                "tab method · 1/2/3 insert coin · enter complete payment · esc back".to_string()
            }
            PaymentMethod::MobileWallet => {
                "tab method · enter payment received · esc back".to_string()
            }
        },
        WizardStep::Complete => "enter print another document · q quit".to_string(),
    }
}
