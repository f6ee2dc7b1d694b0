//! Message types for the application (TEA pattern)

use pkiosk_core::{ConnectionMethod, PaymentMethod, TransferEvent, TransferId, WizardStep};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Progress signal from a simulated transfer timeline
    Transfer {
        id: TransferId,
        event: TransferEvent,
    },

    /// Tick event for spinner animation
    Tick,

    /// Quit immediately (q, Ctrl+C)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Unconditional jump to a step (forward buttons)
    GoTo(WizardStep),
    /// Step-aware back navigation; cancels an in-flight transfer
    Back,
    /// Move the active screen's cursor up
    CursorUp,
    /// Move the active screen's cursor down
    CursorDown,

    // ─────────────────────────────────────────────────────────
    // Connection / Upload
    // ─────────────────────────────────────────────────────────
    /// Pick a transfer method and start its timeline
    ChooseMethod(ConnectionMethod),
    /// Pair with the Bluetooth device at `index` in the listing
    PairDevice { index: usize },
    /// Select the file at `index` in the listing (folders are inert)
    SelectEntry { index: usize },
    /// Replace the Bluetooth file-name input text
    UploadInput { text: String },
    /// Accept the typed file name; a no-op while the input is empty
    ConfirmUpload,

    // ─────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────
    /// Focus the next form field
    LayoutFieldNext,
    /// Focus the previous form field
    LayoutFieldPrev,
    /// Cycle the focused field's value forward
    LayoutValueNext,
    /// Cycle the focused field's value backward
    LayoutValuePrev,
    /// Replace the page-range text
    RangeInput { text: String },
    /// Validate the range and move to the summary
    ContinueToSummary,

    // ─────────────────────────────────────────────────────────
    // Payment
    // ─────────────────────────────────────────────────────────
    SelectPaymentMethod(PaymentMethod),
    /// Drop one coin into the acceptor
    InsertCoin { value: u32 },
    /// Release the cash payment; rejected until the amount is covered
    CompletePayment,
    /// Manual confirmation on the wallet pane
    ConfirmWalletPaid,

    /// "Print Another Document" -- reset the session
    StartOver,
}
