//! Key event handlers for each wizard step

use pkiosk_core::{ConnectionMethod, ConnectionState, PageMode, PaymentMethod, WizardStep};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, LayoutField};

/// Convert key events to messages based on the active wizard step
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere, even inside text inputs.
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.step {
        WizardStep::Start => handle_key_start(key),
        WizardStep::Connection => handle_key_connection(state, key),
        WizardStep::Upload => handle_key_upload(state, key),
        WizardStep::Layout => handle_key_layout(state, key),
        WizardStep::Summary => handle_key_summary(key),
        WizardStep::Payment => handle_key_payment(state, key),
        WizardStep::Complete => handle_key_complete(key),
    }
}

fn handle_key_start(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::GoTo(WizardStep::Connection)),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_connection(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::CursorUp),
        InputKey::Down => Some(Message::CursorDown),
        InputKey::Enter => {
            let method = ConnectionMethod::ALL[state.ui.connection_cursor];
            Some(Message::ChooseMethod(method))
        }
        InputKey::Esc | InputKey::Backspace => Some(Message::Back),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_upload(state: &AppState, key: InputKey) -> Option<Message> {
    match state.connection.state {
        // Selectable listings: Bluetooth scan results or USB/cloud files
        ConnectionState::Scanning | ConnectionState::Ready => match key {
            InputKey::Up => Some(Message::CursorUp),
            InputKey::Down => Some(Message::CursorDown),
            InputKey::Enter => {
                let index = state.ui.listing_cursor;
                if state.connection.state == ConnectionState::Scanning {
                    Some(Message::PairDevice { index })
                } else {
                    Some(Message::SelectEntry { index })
                }
            }
            InputKey::Esc => Some(Message::Back),
            InputKey::Char('q') => Some(Message::Quit),
            _ => None,
        },

        // Bluetooth peer connected: free-text file name entry
        ConnectionState::Connected => match key {
            InputKey::Enter => Some(Message::ConfirmUpload),
            InputKey::Esc => Some(Message::Back),
            InputKey::Backspace => {
                let mut text = state.ui.upload_input.clone();
                text.pop();
                Some(Message::UploadInput { text })
            }
            // Clear all input
            InputKey::CharCtrl('u') => Some(Message::UploadInput {
                text: String::new(),
            }),
            InputKey::Char(c) => {
                let mut text = state.ui.upload_input.clone();
                text.push(c);
                Some(Message::UploadInput { text })
            }
            _ => None,
        },

        // Waiting panes: the simulator is in charge, only backing out works
        _ => match key {
            InputKey::Esc => Some(Message::Back),
            InputKey::Char('q') => Some(Message::Quit),
            _ => None,
        },
    }
}

fn handle_key_layout(state: &AppState, key: InputKey) -> Option<Message> {
    let editing_range =
        state.ui.layout_field == LayoutField::Pages && state.job.page_mode == PageMode::Range;

    // While the range text has focus, printable characters go into it.
    if editing_range {
        match key {
            InputKey::Char(c) if c.is_ascii_digit() || matches!(c, ',' | '-' | ' ') => {
                let mut text = state.job.page_range.clone();
                text.push(c);
                return Some(Message::RangeInput { text });
            }
            InputKey::Backspace => {
                let mut text = state.job.page_range.clone();
                text.pop();
                return Some(Message::RangeInput { text });
            }
            InputKey::CharCtrl('u') => {
                return Some(Message::RangeInput {
                    text: String::new(),
                });
            }
            _ => {}
        }
    }

    match key {
        InputKey::Up => Some(Message::LayoutFieldPrev),
        InputKey::Down | InputKey::Tab => Some(Message::LayoutFieldNext),
        InputKey::BackTab => Some(Message::LayoutFieldPrev),
        InputKey::Right => Some(Message::LayoutValueNext),
        InputKey::Left => Some(Message::LayoutValuePrev),
        InputKey::Enter => Some(Message::ContinueToSummary),
        InputKey::Esc => Some(Message::Back),
        InputKey::Char('q') if !editing_range => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_summary(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::GoTo(WizardStep::Payment)),
        InputKey::Esc | InputKey::Backspace => Some(Message::Back),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_payment(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::Left | InputKey::Right => Some(Message::SelectPaymentMethod(
            state.payment.method.toggled(),
        )),
        InputKey::Esc => Some(Message::Back),
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Enter => match state.payment.method {
            PaymentMethod::Cash => Some(Message::CompletePayment),
            PaymentMethod::MobileWallet => Some(Message::ConfirmWalletPaid),
        },
        // Coin buttons, cash pane only
        InputKey::Char('1') if state.payment.method == PaymentMethod::Cash => {
            Some(Message::InsertCoin { value: 1 })
        }
        InputKey::Char('2') if state.payment.method == PaymentMethod::Cash => {
            Some(Message::InsertCoin { value: 5 })
        }
        InputKey::Char('3') if state.payment.method == PaymentMethod::Cash => {
            Some(Message::InsertCoin { value: 10 })
        }
        _ => None,
    }
}

fn handle_key_complete(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('n') => Some(Message::StartOver),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}
