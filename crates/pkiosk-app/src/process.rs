//! Message processing and simulator task dispatch
//!
//! Runs each message through the TEA update loop, then performs whatever
//! action the handler requested: spawning a scripted timeline, continuing
//! one (pairing, selection settle), or aborting the one in flight. At
//! most one timeline task exists at a time; starting a new leg replaces
//! (and aborts) the previous one.

use tokio::task::JoinHandle;

use pkiosk_sim::{
    spawn_pairing, spawn_selection_confirm, spawn_timeline, Timing, TransferSender,
};

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Owner of the single in-flight timeline task.
#[derive(Debug, Default)]
pub struct TransferTasks {
    current: Option<JoinHandle<()>>,
}

impl TransferTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the in-flight task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.abort();
        }
    }

    fn replace(&mut self, handle: JoinHandle<()>) {
        self.cancel();
        self.current = Some(handle);
    }
}

impl Drop for TransferTasks {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Process a message through the TEA update function
///
/// Must be called from within a tokio runtime; actions spawn tasks.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    signal_tx: &TransferSender,
    tasks: &mut TransferTasks,
) {
    // Process message through TEA update loop
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, state, signal_tx, tasks);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

fn handle_action(
    action: UpdateAction,
    state: &AppState,
    signal_tx: &TransferSender,
    tasks: &mut TransferTasks,
) {
    let timing = Timing {
        time_scale: state.settings.simulation.time_scale,
    };

    match action {
        UpdateAction::StartTransfer { id, method } => {
            tasks.replace(spawn_timeline(id, method, timing, signal_tx.clone()));
        }
        UpdateAction::StartPairing { id } => {
            tasks.replace(spawn_pairing(id, timing, signal_tx.clone()));
        }
        UpdateAction::ConfirmSelection { id, delay_ms } => {
            tasks.replace(spawn_selection_confirm(id, delay_ms, timing, signal_tx.clone()));
        }
        UpdateAction::CancelTransfer => {
            tasks.cancel();
        }
    }
}
