//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, warn};

use pkiosk_core::{
    wallet_reference, ConnectionMethod, ConnectionState, PaymentMethod, SourceEntry,
    TransferEvent, TransferId, WizardStep,
};
use pkiosk_sim::{BLUETOOTH_UPLOAD_MS, SELECT_FILE_MS};

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.ui.tick = state.ui.tick.wrapping_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::GoTo(step) => {
            state.step = step;
            UpdateResult::none()
        }

        Message::Back => handle_back(state),

        Message::CursorUp => {
            move_cursor(state, -1);
            UpdateResult::none()
        }

        Message::CursorDown => {
            move_cursor(state, 1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Connection / Upload
        // ─────────────────────────────────────────────────────────
        Message::ChooseMethod(method) => handle_choose_method(state, method),

        Message::Transfer { id, event } => handle_transfer_event(state, id, event),

        Message::PairDevice { index } => handle_pair_device(state, index),

        Message::SelectEntry { index } => handle_select_entry(state, index),

        Message::UploadInput { text } => {
            state.ui.upload_input = text;
            UpdateResult::none()
        }

        Message::ConfirmUpload => handle_confirm_upload(state),

        // ─────────────────────────────────────────────────────────
        // Layout
        // ─────────────────────────────────────────────────────────
        Message::LayoutFieldNext => {
            state.ui.layout_field = state.ui.layout_field.next();
            UpdateResult::none()
        }

        Message::LayoutFieldPrev => {
            state.ui.layout_field = state.ui.layout_field.previous();
            UpdateResult::none()
        }

        Message::LayoutValueNext => {
            cycle_layout_value(state, true);
            UpdateResult::none()
        }

        Message::LayoutValuePrev => {
            cycle_layout_value(state, false);
            UpdateResult::none()
        }

        Message::RangeInput { text } => {
            state.job.page_range = text;
            state.ui.range_error = None;
            UpdateResult::none()
        }

        Message::ContinueToSummary => {
            match pkiosk_core::page_count(&state.job) {
                Ok(_) => {
                    state.ui.range_error = None;
                    state.step = WizardStep::Summary;
                }
                Err(e) => {
                    debug!("Page range rejected: {e}");
                    state.ui.range_error = Some(e);
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Payment
        // ─────────────────────────────────────────────────────────
        Message::SelectPaymentMethod(method) => {
            state.payment.method = method;
            state.payment.notice = None;
            if method == PaymentMethod::MobileWallet && state.payment.wallet_reference.is_none() {
                state.payment.wallet_reference = Some(wallet_reference());
            }
            UpdateResult::none()
        }

        Message::InsertCoin { value } => {
            let Ok(cost) = state.cost() else {
                return UpdateResult::none();
            };
            match state.payment.cash.insert(value, cost.total()) {
                Ok(()) => state.payment.notice = None,
                Err(e) => state.payment.notice = Some(e.to_string()),
            }
            UpdateResult::none()
        }

        Message::CompletePayment => {
            let Ok(cost) = state.cost() else {
                return UpdateResult::none();
            };
            match state.payment.cash.settle(cost.total()) {
                Ok(()) => {
                    state.payment.notice = None;
                    state.step = WizardStep::Complete;
                }
                Err(e) => state.payment.notice = Some(e.to_string()),
            }
            UpdateResult::none()
        }

        Message::ConfirmWalletPaid => {
            state.step = WizardStep::Complete;
            UpdateResult::none()
        }

        Message::StartOver => {
            state.reset_session();
            UpdateResult::none()
        }
    }
}

/// Step-aware back navigation.
///
/// Backing out of the Upload screen also tears down the transfer: the
/// in-flight timeline task is cancelled and the connection state, listing,
/// and selected device are cleared, exactly as if no method had been
/// chosen yet.
fn handle_back(state: &mut AppState) -> UpdateResult {
    match state.step {
        WizardStep::Upload => {
            state.connection.reset();
            state.ui.listing_cursor = 0;
            state.ui.upload_input.clear();
            state.step = WizardStep::Connection;
            UpdateResult::action(UpdateAction::CancelTransfer)
        }
        step => {
            if let Some(previous) = step.previous() {
                state.step = previous;
            }
            UpdateResult::none()
        }
    }
}

fn move_cursor(state: &mut AppState, delta: isize) {
    let (cursor, len) = match state.step {
        WizardStep::Connection => (
            &mut state.ui.connection_cursor,
            ConnectionMethod::ALL.len(),
        ),
        WizardStep::Upload if state.connection.state.has_listing() => {
            (&mut state.ui.listing_cursor, state.connection.entries.len())
        }
        _ => return,
    };
    if len == 0 {
        return;
    }
    let next = (*cursor as isize + delta).rem_euclid(len as isize);
    *cursor = next as usize;
}

fn handle_choose_method(state: &mut AppState, method: ConnectionMethod) -> UpdateResult {
    state.connection.reset();
    state.connection.method = Some(method);
    // The cloud flow shows its QR immediately; the others start connecting.
    state.connection.state = match method {
        ConnectionMethod::Cloud => ConnectionState::QrCode,
        ConnectionMethod::Bluetooth | ConnectionMethod::Usb => ConnectionState::Connecting,
    };
    state.ui.listing_cursor = 0;
    state.ui.upload_input.clear();
    state.step = WizardStep::Upload;

    let id = state.begin_transfer();
    UpdateResult::action(UpdateAction::StartTransfer { id, method })
}

fn handle_transfer_event(
    state: &mut AppState,
    id: TransferId,
    event: TransferEvent,
) -> UpdateResult {
    if !state.is_current_attempt(id) {
        // A cancelled timeline's stragglers; the user already moved on.
        debug!("Ignoring stale {id} event: {event:?}");
        return UpdateResult::none();
    }

    match event {
        TransferEvent::DevicesDiscovered { devices } => {
            state.connection.state = ConnectionState::Scanning;
            state.connection.entries = devices;
            state.ui.listing_cursor = 0;
        }
        TransferEvent::MediaMounted => {
            state.connection.state = ConnectionState::Reading;
        }
        TransferEvent::QrScanned => {
            state.connection.state = ConnectionState::Authenticating;
        }
        TransferEvent::ListingReady { entries } => {
            state.connection.state = ConnectionState::Ready;
            state.connection.entries = entries;
            state.ui.listing_cursor = 0;
        }
        TransferEvent::Paired => {
            state.connection.state = ConnectionState::Connected;
        }
        TransferEvent::SelectionConfirmed => {
            state.step = WizardStep::Layout;
        }
        TransferEvent::Failed { error } => {
            warn!("{id} failed: {error}");
            state.connection.error = Some(error);
        }
    }
    UpdateResult::none()
}

fn handle_pair_device(state: &mut AppState, index: usize) -> UpdateResult {
    if state.connection.state != ConnectionState::Scanning {
        return UpdateResult::none();
    }
    let Some(entry @ SourceEntry::Device { .. }) = state.connection.entries.get(index) else {
        return UpdateResult::none();
    };
    let Some(id) = state.connection.attempt else {
        return UpdateResult::none();
    };

    state.connection.selected_device = Some(entry.clone());
    state.connection.state = ConnectionState::Pairing;
    UpdateResult::action(UpdateAction::StartPairing { id })
}

fn handle_select_entry(state: &mut AppState, index: usize) -> UpdateResult {
    if state.connection.state != ConnectionState::Ready {
        return UpdateResult::none();
    }
    let Some(entry) = state.connection.entries.get(index) else {
        return UpdateResult::none();
    };
    // Folders are inert placeholders.
    let SourceEntry::File { name, .. } = entry else {
        return UpdateResult::none();
    };
    let Some(id) = state.connection.attempt else {
        return UpdateResult::none();
    };

    state.document = Some(name.clone());
    UpdateResult::action(UpdateAction::ConfirmSelection {
        id,
        delay_ms: SELECT_FILE_MS,
    })
}

/// Accept the typed file name on the Bluetooth-connected pane.
/// An empty input is a silent no-op, matching the kiosk's file picker.
fn handle_confirm_upload(state: &mut AppState) -> UpdateResult {
    if state.connection.state != ConnectionState::Connected {
        return UpdateResult::none();
    }
    let name = state.ui.upload_input.trim();
    if name.is_empty() {
        return UpdateResult::none();
    }
    let Some(id) = state.connection.attempt else {
        return UpdateResult::none();
    };

    state.document = Some(name.to_string());
    UpdateResult::action(UpdateAction::ConfirmSelection {
        id,
        delay_ms: BLUETOOTH_UPLOAD_MS,
    })
}

fn cycle_layout_value(state: &mut AppState, forward: bool) {
    use crate::state::LayoutField;
    use pkiosk_core::{PageMode, PaperSize};

    state.ui.range_error = None;
    match state.ui.layout_field {
        LayoutField::PaperSize => {
            let sizes = PaperSize::ALL;
            let i = sizes
                .iter()
                .position(|s| *s == state.job.paper_size)
                .unwrap_or(0);
            let next = if forward {
                (i + 1) % sizes.len()
            } else {
                (i + sizes.len() - 1) % sizes.len()
            };
            state.job.paper_size = sizes[next];
        }
        LayoutField::Orientation => {
            state.job.orientation = state.job.orientation.toggled();
        }
        LayoutField::ColorMode => {
            state.job.color_mode = state.job.color_mode.toggled();
        }
        LayoutField::Pages => {
            state.job.page_mode = match state.job.page_mode {
                PageMode::All => PageMode::Range,
                PageMode::Range => PageMode::All,
            };
        }
        LayoutField::Copies => {
            if forward {
                state.job.increment_copies();
            } else {
                state.job.decrement_copies();
            }
        }
    }
}
