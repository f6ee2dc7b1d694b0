//! Transfer screen: per-method, per-state panes
//!
//! While a timeline is running this screen only shows progress; once a
//! listing is ready (or a Bluetooth peer is connected) it becomes
//! interactive.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use pkiosk_app::AppState;
use pkiosk_core::{ConnectionMethod, ConnectionState};
use pkiosk_sim::{CLOUD_PORTAL_URL, CLOUD_SESSION_CODE};

use crate::layout::centered;
use crate::theme::{self, palette};
use crate::widgets::{listing_lines, qr, spinner};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(method) = state.connection.method else {
        return;
    };

    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);

    // Method banner
    let banner = Line::from(vec![
        Span::styled(method.label(), theme::title()),
        Span::styled(
            format!("  ·  {}", method.description()),
            theme::muted(),
        ),
    ]);
    frame.render_widget(Paragraph::new(banner), chunks[0]);

    if let Some(error) = state.connection.error {
        render_error(frame, chunks[1], error);
        return;
    }

    match state.connection.state {
        ConnectionState::Connecting => {
            let text = match method {
                ConnectionMethod::Bluetooth => "Searching for devices...",
                ConnectionMethod::Usb => "Detecting USB drive...",
                ConnectionMethod::Cloud => "Connecting...",
            };
            render_wait(frame, chunks[1], state.ui.tick, text, None);
        }
        ConnectionState::Reading => {
            render_wait(
                frame,
                chunks[1],
                state.ui.tick,
                "Reading USB contents...",
                Some(0.7),
            );
        }
        ConnectionState::Authenticating => {
            render_wait(
                frame,
                chunks[1],
                state.ui.tick,
                "QR Code Scanned! Authenticating with cloud storage...",
                Some(0.6),
            );
        }
        ConnectionState::QrCode => render_qr_pane(frame, chunks[1], state),
        ConnectionState::Scanning => {
            render_listing(frame, chunks[1], state, "Available devices:")
        }
        ConnectionState::Ready => {
            let caption = match method {
                ConnectionMethod::Usb => "Files on USB drive:",
                _ => "Your files:",
            };
            render_listing(frame, chunks[1], state, caption);
        }
        ConnectionState::Pairing => render_pairing(frame, chunks[1], state),
        ConnectionState::Connected => render_connected(frame, chunks[1], state),
        ConnectionState::Idle => {}
    }
}

fn render_wait(frame: &mut Frame, area: Rect, tick: u64, text: &str, progress: Option<f64>) {
    let lines = vec![Line::from(vec![
        Span::styled(spinner(tick), Style::default().fg(palette::ACCENT)),
        Span::raw(" "),
        Span::styled(text.to_string(), Style::default().fg(palette::TEXT_PRIMARY)),
    ])];

    let target = centered(area, 60, 4);
    let chunks =
        Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).split(target);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[0]);

    if let Some(ratio) = progress {
        let gauge = Gauge::default()
            .ratio(ratio)
            .gauge_style(Style::default().fg(palette::ACCENT))
            .label("");
        frame.render_widget(gauge, chunks[1]);
    }
}

fn render_listing(frame: &mut Frame, area: Rect, state: &AppState, caption: &str) {
    let mut lines = vec![
        Line::styled(caption.to_string(), Style::default().fg(palette::TEXT_SECONDARY)),
        Line::raw(""),
    ];
    lines.extend(listing_lines(
        &state.connection.entries,
        state.ui.listing_cursor,
        44,
    ));

    let target = centered(area, 48, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines), target);
}

fn render_pairing(frame: &mut Frame, area: Rect, state: &AppState) {
    let device = state
        .connection
        .selected_device
        .as_ref()
        .map(|d| d.name().to_string())
        .unwrap_or_default();

    let lines = vec![
        Line::from(vec![
            Span::styled(spinner(state.ui.tick), Style::default().fg(palette::ACCENT)),
            Span::styled(format!(" Pairing with {device}..."), theme::value()),
        ]),
        Line::styled("Please confirm on your device", theme::muted()),
    ];
    let target = centered(area, 60, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}

fn render_connected(frame: &mut Frame, area: Rect, state: &AppState) {
    let device = state
        .connection
        .selected_device
        .as_ref()
        .map(|d| d.name().to_string())
        .unwrap_or_default();

    let lines = vec![
        Line::from(vec![
            Span::styled("✔ ", Style::default().fg(palette::STATUS_GREEN)),
            Span::styled(format!("Connected to {device}"), theme::value()),
        ]),
        Line::styled("Send your file from your device now", theme::muted()),
        Line::raw(""),
        Line::from(vec![
            Span::styled("File name: ", Style::default().fg(palette::TEXT_SECONDARY)),
            Span::styled(state.ui.upload_input.clone(), theme::value()),
            Span::styled("▏", Style::default().fg(palette::ACCENT)),
        ]),
    ];
    let target = centered(area, 60, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}

fn render_qr_pane(frame: &mut Frame, area: Rect, state: &AppState) {
    let qr_lines = qr::qr_lines();
    let qr_height = qr_lines.len() as u16;

    let target = centered(area, 74, qr_height.max(12));
    let chunks =
        Layout::horizontal([Constraint::Length(36), Constraint::Min(0)]).split(target);

    frame.render_widget(Paragraph::new(qr_lines), chunks[0]);

    let info = vec![
        Line::styled("Scan to Connect", theme::title()),
        Line::styled(
            "Use your phone camera to scan this QR code",
            theme::muted(),
        ),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Session Code  ", Style::default().fg(palette::TEXT_SECONDARY)),
            Span::styled(CLOUD_SESSION_CODE, theme::value()),
        ]),
        Line::from(vec![
            Span::styled("Or visit:  ", Style::default().fg(palette::TEXT_SECONDARY)),
            Span::styled(CLOUD_PORTAL_URL, theme::value()),
        ]),
        Line::styled("and enter the session code", theme::muted()),
        Line::raw(""),
        Line::styled("Steps:", Style::default().fg(palette::TEXT_SECONDARY)),
        Line::styled(format!(" 1. Scan QR code or visit {CLOUD_PORTAL_URL}"), theme::muted()),
        Line::styled(" 2. Log into Google Drive, Dropbox, or OneDrive", theme::muted()),
        Line::styled(" 3. Select files to print", theme::muted()),
        Line::raw(""),
        Line::from(vec![
            Span::styled(spinner(state.ui.tick), Style::default().fg(palette::ACCENT)),
            Span::styled(" Waiting for connection...", theme::muted()),
        ]),
    ];
    frame.render_widget(Paragraph::new(info), chunks[1]);
}

fn render_error(frame: &mut Frame, area: Rect, error: pkiosk_core::ConnectionError) {
    let lines = vec![
        Line::from(vec![
            Span::styled("✖ ", Style::default().fg(palette::STATUS_RED)),
            Span::styled(error.to_string(), Style::default().fg(palette::STATUS_RED)),
        ]),
        Line::styled("Press esc to choose another method", theme::muted()),
    ];
    let target = centered(area, 50, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}
