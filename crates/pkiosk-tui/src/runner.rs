//! Main TUI runner - entry point and event loop
//!
//! The loop drains simulator signals, draws, then polls the terminal.
//! Simulator timelines run as background tasks owned by [`TransferTasks`];
//! everything else is single-threaded TEA.

use tokio::sync::mpsc;

use pkiosk_app::{process_message, AppState, Message, Settings, TransferTasks};
use pkiosk_core::prelude::*;
use pkiosk_sim::{TransferSender, TransferSignal};

use crate::{event, render, terminal};

/// Run the kiosk UI until the user quits.
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::with_settings(settings);
    info!(
        "Kiosk starting: bw={} color={} time_scale={}",
        state.settings.pricing.black_white,
        state.settings.pricing.color,
        state.settings.simulation.time_scale
    );

    // Channel for simulator timeline signals
    let (signal_tx, signal_rx) = mpsc::channel::<TransferSignal>(64);

    // Owner of the single in-flight timeline task
    let mut tasks = TransferTasks::new();

    let result = run_loop(&mut term, &mut state, signal_rx, &signal_tx, &mut tasks);

    // Abort any timeline still sleeping
    tasks.cancel();

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut signal_rx: mpsc::Receiver<TransferSignal>,
    signal_tx: &TransferSender,
    tasks: &mut TransferTasks,
) -> Result<()> {
    while !state.should_quit() {
        // Process simulator signals (non-blocking)
        while let Ok(signal) = signal_rx.try_recv() {
            process_message(
                state,
                Message::Transfer {
                    id: signal.id,
                    event: signal.event,
                },
                signal_tx,
                tasks,
            );
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, signal_tx, tasks);
        }
    }

    Ok(())
}
