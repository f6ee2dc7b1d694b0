//! Application state (Model in TEA pattern)
//!
//! All wizard state lives in one owned [`AppState`] record, mutated only by
//! the update function on the UI thread. Nothing here is shared or locked.

use pkiosk_core::{
    cost_summary, CashAcceptor, ConnectionError, ConnectionState, ConnectionMethod, CostSummary,
    PageRangeError, PaymentMethod, PriceList, PrintJobConfig, SourceEntry, TransferId, WizardStep,
};

use crate::config::Settings;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Everything about the current transfer attempt.
#[derive(Debug, Clone, Default)]
pub struct ConnectionFlow {
    /// Transfer channel chosen on the Connection screen
    pub method: Option<ConnectionMethod>,

    /// Position on the method's simulated timeline
    pub state: ConnectionState,

    /// Listing produced by the timeline (devices or files)
    pub entries: Vec<SourceEntry>,

    /// The Bluetooth device the user paired with
    pub selected_device: Option<SourceEntry>,

    /// A recoverable failure surfaced on the Upload screen
    pub error: Option<ConnectionError>,

    /// Identity of the in-flight attempt; events from any other attempt
    /// are stale and ignored
    pub attempt: Option<TransferId>,
}

impl ConnectionFlow {
    /// Back to square one: no method, no listing, no attempt.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Everything about the current payment.
#[derive(Debug, Clone, Default)]
pub struct PaymentFlow {
    pub method: PaymentMethod,

    /// The coin slot's running total
    pub cash: CashAcceptor,

    /// Display-only GCash reference, generated once per session when the
    /// wallet pane is first shown
    pub wallet_reference: Option<String>,

    /// Status line for rejected interactions (acceptor closed, amount
    /// still due); cleared by the next accepted one
    pub notice: Option<String>,
}

impl PaymentFlow {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Focusable field on the Layout screen, in visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutField {
    #[default]
    PaperSize,
    Orientation,
    ColorMode,
    Pages,
    Copies,
}

impl LayoutField {
    pub const ALL: [LayoutField; 5] = [
        LayoutField::PaperSize,
        LayoutField::Orientation,
        LayoutField::ColorMode,
        LayoutField::Pages,
        LayoutField::Copies,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LayoutField::PaperSize => "Paper Size",
            LayoutField::Orientation => "Orientation",
            LayoutField::ColorMode => "Color Mode",
            LayoutField::Pages => "Pages to Print",
            LayoutField::Copies => "Number of Copies",
        }
    }

    pub fn next(&self) -> LayoutField {
        let i = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> LayoutField {
        let i = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Per-screen cursor and input state. Cosmetic only -- nothing in here
/// affects what the job costs or where the wizard can go next.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Frame counter driving spinners on the waiting panes
    pub tick: u64,

    /// Cursor on the Connection screen's method list
    pub connection_cursor: usize,

    /// Cursor on the Upload screen's device/file listing
    pub listing_cursor: usize,

    /// Focused field on the Layout screen
    pub layout_field: LayoutField,

    /// File-name input shown when a Bluetooth peer is connected
    pub upload_input: String,

    /// Inline validation error for the page-range text
    pub range_error: Option<PageRangeError>,
}

/// The single owner of all wizard state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub phase: AppPhase,

    /// The one active screen
    pub step: WizardStep,

    pub connection: ConnectionFlow,

    /// Name of the document chosen (or named) for printing
    pub document: Option<String>,

    pub job: PrintJobConfig,

    pub payment: PaymentFlow,

    pub settings: Settings,

    pub ui: UiState,

    /// Monotonic counter behind [`AppState::begin_transfer`]
    next_attempt: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Allocate a fresh transfer attempt id.
    pub fn begin_transfer(&mut self) -> TransferId {
        self.next_attempt += 1;
        let id = TransferId(self.next_attempt);
        self.connection.attempt = Some(id);
        id
    }

    /// Whether a transfer event belongs to the current attempt.
    pub fn is_current_attempt(&self, id: TransferId) -> bool {
        self.connection.attempt == Some(id)
    }

    pub fn prices(&self) -> PriceList {
        self.settings.pricing.price_list()
    }

    /// Current cost breakdown, recomputed from the live job config on
    /// every call. Fails only while the page-range text is malformed, and
    /// the Layout screen refuses to continue in that case.
    pub fn cost(&self) -> Result<CostSummary, PageRangeError> {
        cost_summary(&self.job, self.prices())
    }

    /// "Print Another Document": clear the session and return to Start.
    ///
    /// The job config survives on purpose -- the kiosk leaves the previous
    /// customer's layout in place.
    pub fn reset_session(&mut self) {
        self.connection.reset();
        self.document = None;
        self.payment.reset();
        self.ui = UiState::default();
        self.step = WizardStep::Start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkiosk_core::ColorMode;

    #[test]
    fn test_default_state() {
        let state = AppState::new();
        assert_eq!(state.step, WizardStep::Start);
        assert_eq!(state.phase, AppPhase::Running);
        assert!(state.connection.method.is_none());
        assert!(state.document.is_none());
        assert_eq!(state.payment.cash.inserted(), 0);
    }

    #[test]
    fn test_transfer_ids_are_monotonic() {
        let mut state = AppState::new();
        let a = state.begin_transfer();
        let b = state.begin_transfer();
        assert_ne!(a, b);
        assert!(state.is_current_attempt(b));
        assert!(!state.is_current_attempt(a));
    }

    #[test]
    fn test_cost_tracks_live_config() {
        let mut state = AppState::new();
        assert_eq!(state.cost().unwrap().total(), 20);

        state.job.color_mode = ColorMode::Color;
        assert_eq!(state.cost().unwrap().total(), 50);

        state.job.copies = 2;
        assert_eq!(state.cost().unwrap().total(), 100);
    }

    #[test]
    fn test_reset_session_keeps_job_config() {
        let mut state = AppState::new();
        state.step = WizardStep::Complete;
        state.connection.method = Some(ConnectionMethod::Usb);
        state.connection.state = ConnectionState::Ready;
        state.connection.entries = vec![SourceEntry::file("Report.docx", "1.8 MB")];
        state.begin_transfer();
        state.document = Some("Report.docx".to_string());
        state.payment.cash.insert(10, 20).unwrap();
        state.job.copies = 4;

        state.reset_session();

        assert_eq!(state.step, WizardStep::Start);
        assert!(state.connection.method.is_none());
        assert_eq!(state.connection.state, ConnectionState::Idle);
        assert!(state.connection.entries.is_empty());
        assert!(state.connection.attempt.is_none());
        assert!(state.document.is_none());
        assert_eq!(state.payment.cash.inserted(), 0);
        // Layout survives for the next customer.
        assert_eq!(state.job.copies, 4);
    }

    #[test]
    fn test_layout_field_cycle() {
        assert_eq!(LayoutField::PaperSize.next(), LayoutField::Orientation);
        assert_eq!(LayoutField::Copies.next(), LayoutField::PaperSize);
        assert_eq!(LayoutField::PaperSize.previous(), LayoutField::Copies);
    }
}
