//! Payment screen: cash acceptor or mobile wallet

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use pkiosk_app::AppState;
use pkiosk_core::{PaymentMethod, COIN_DENOMINATIONS};

use crate::layout::centered;
use crate::theme::{self, palette};
use crate::widgets::qr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Ok(cost) = state.cost() else {
        return;
    };
    let total = cost.total();

    let mut lines = vec![method_toggle(state), Line::raw("")];

    match state.payment.method {
        PaymentMethod::Cash => cash_pane(state, total, &mut lines),
        PaymentMethod::MobileWallet => wallet_pane(state, total, &mut lines),
    }

    if let Some(notice) = &state.payment.notice {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            notice.clone(),
            Style::default().fg(palette::STATUS_YELLOW),
        ));
    }

    let target = centered(area, 60, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}

fn method_toggle(state: &AppState) -> Line<'static> {
    let mut spans = Vec::new();
    for method in [PaymentMethod::Cash, PaymentMethod::MobileWallet] {
        let style = if state.payment.method == method {
            theme::selected()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!("[ {} ]", method.label()), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn cash_pane(state: &AppState, total: u32, lines: &mut Vec<Line<'static>>) {
    let cash = &state.payment.cash;

    lines.push(Line::from(vec![
        Span::styled("Amount Due  ", Style::default().fg(palette::TEXT_SECONDARY)),
        Span::styled(
            format!("{total} pesos"),
            Style::default()
                .fg(palette::CASH_GOLD)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Inserted    ", Style::default().fg(palette::TEXT_SECONDARY)),
        Span::styled(
            format!("{} pesos", cash.inserted()),
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let balance = if cash.is_settled(total) {
        Line::styled(
            format!("Change: {} pesos", cash.change_due(total)),
            Style::default().fg(palette::STATUS_GREEN),
        )
    } else {
        Line::styled(
            format!("Remaining: {} pesos", cash.remaining_due(total)),
            Style::default().fg(palette::TEXT_SECONDARY),
        )
    };
    lines.push(balance);
    lines.push(Line::raw(""));

    // Coin buttons; the acceptor closes once the amount due is covered.
    let closed = cash.is_settled(total);
    let mut spans = Vec::new();
    for (i, coin) in COIN_DENOMINATIONS.iter().enumerate() {
        let style = if closed {
            theme::muted()
        } else {
            Style::default()
                .fg(palette::CASH_GOLD)
                .add_modifier(Modifier::BOLD)
        };
        let unit = if *coin == 1 { "peso" } else { "pesos" };
        spans.push(Span::styled(format!("[{}] {coin} {unit}", i + 1), style));
        spans.push(Span::raw("   "));
    }
    lines.push(Line::from(spans));
    lines.push(Line::raw(""));

    if closed {
        lines.push(Line::from(vec![
            Span::styled("Complete Payment ", theme::value()),
            Span::styled("[Enter]", theme::muted()),
        ]));
    }
}

fn wallet_pane(state: &AppState, total: u32, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(vec![
        Span::styled("Amount Due  ", Style::default().fg(palette::TEXT_SECONDARY)),
        Span::styled(
            format!("{total} pesos"),
            Style::default()
                .fg(palette::WALLET_BLUE)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::styled(
        "Scan with GCash app to pay",
        theme::muted(),
    ));
    lines.push(Line::raw(""));
    lines.extend(qr::qr_lines());
    lines.push(Line::raw(""));

    if let Some(reference) = &state.payment.wallet_reference {
        lines.push(Line::from(vec![
            Span::styled("Transaction ID: ", theme::muted()),
            Span::styled(reference.clone(), theme::value()),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Payment Received ", theme::value()),
        Span::styled("[Enter]", theme::muted()),
    ]));
}
