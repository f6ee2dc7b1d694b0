//! Top-level view function: header, one screen per step, status bar

use ratatui::Frame;

use pkiosk_app::AppState;
use pkiosk_core::WizardStep;

use crate::layout::screen_chunks;
use crate::widgets::{
    complete, connection, header, layout_form, payment, start, status_bar, summary, upload,
};

/// Render the whole UI for the current state
pub fn view(frame: &mut Frame, state: &AppState) {
    let (header_area, body, status_area) = screen_chunks(frame.area());

    header::render(frame, header_area, state);

    match state.step {
        WizardStep::Start => start::render(frame, body, state),
        WizardStep::Connection => connection::render(frame, body, state),
        WizardStep::Upload => upload::render(frame, body, state),
        WizardStep::Layout => layout_form::render(frame, body, state),
        WizardStep::Summary => summary::render(frame, body, state),
        WizardStep::Payment => payment::render(frame, body, state),
        WizardStep::Complete => complete::render(frame, body, state),
    }

    status_bar::render(frame, status_area, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    /// Flatten the test backend's buffer into one string for containment
    /// assertions.
    fn render_to_text(state: &AppState) -> String {
        let backend = TestBackend::new(90, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| view(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_start_screen_renders_banner() {
        let state = AppState::new();
        let text = render_to_text(&state);
        assert!(text.contains("Print Kiosk Go"));
        assert!(text.contains("Start Printing"));
        assert!(text.contains("Step 1/7"));
    }

    #[test]
    fn test_connection_screen_lists_methods() {
        let mut state = AppState::new();
        state.step = WizardStep::Connection;
        let text = render_to_text(&state);
        assert!(text.contains("Cloud Storage"));
        assert!(text.contains("Bluetooth"));
        assert!(text.contains("USB Drive"));
    }

    #[test]
    fn test_cloud_qr_pane_shows_session_code() {
        let mut state = AppState::new();
        state.step = WizardStep::Upload;
        state.connection.method = Some(pkiosk_core::ConnectionMethod::Cloud);
        state.connection.state = pkiosk_core::ConnectionState::QrCode;
        let text = render_to_text(&state);
        assert!(text.contains("KS-8247"));
        assert!(text.contains("print.kiosk.com"));
    }

    #[test]
    fn test_summary_screen_shows_totals() {
        let mut state = AppState::new();
        state.step = WizardStep::Summary;
        state.document = Some("Report.docx".to_string());
        state.connection.method = Some(pkiosk_core::ConnectionMethod::Usb);
        let text = render_to_text(&state);
        assert!(text.contains("Report.docx"));
        assert!(text.contains("20 pesos"));
        assert!(text.contains("10 pages"));
    }

    #[test]
    fn test_payment_screen_shows_amount_due() {
        let mut state = AppState::new();
        state.step = WizardStep::Payment;
        let text = render_to_text(&state);
        assert!(text.contains("Amount Due"));
        assert!(text.contains("Remaining: 20 pesos"));
    }
}
