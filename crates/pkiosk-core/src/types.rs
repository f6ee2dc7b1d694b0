//! Domain types for the kiosk wizard

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Wizard Steps
// ─────────────────────────────────────────────────────────────────────────────

/// One screen in the linear wizard flow.
///
/// Exactly one step is active at a time. Transitions happen only through
/// explicit user actions, with a single exception: the simulator-confirmed
/// advance from [`WizardStep::Upload`] to [`WizardStep::Layout`] after a
/// document has been picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    /// Welcome banner with a single "Start Printing" action
    #[default]
    Start,

    /// Transfer method selection (cloud, Bluetooth, USB)
    Connection,

    /// Simulated transfer/connection, ending in a selectable listing
    Upload,

    /// Print settings form (paper, orientation, color, pages, copies)
    Layout,

    /// Itemized cost summary
    Summary,

    /// Cash or mobile-wallet payment
    Payment,

    /// Success screen with a "Print Another Document" reset action
    Complete,
}

impl WizardStep {
    /// All steps in wizard order.
    pub const ALL: [WizardStep; 7] = [
        WizardStep::Start,
        WizardStep::Connection,
        WizardStep::Upload,
        WizardStep::Layout,
        WizardStep::Summary,
        WizardStep::Payment,
        WizardStep::Complete,
    ];

    /// Screen title shown in the header.
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Start => "Welcome",
            WizardStep::Connection => "Choose Connection Method",
            WizardStep::Upload => "Transfer Document",
            WizardStep::Layout => "Print Settings",
            WizardStep::Summary => "Order Summary",
            WizardStep::Payment => "Payment",
            WizardStep::Complete => "Printing Complete",
        }
    }

    /// 1-indexed position in the flow, for the header breadcrumb.
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Start => 1,
            WizardStep::Connection => 2,
            WizardStep::Upload => 3,
            WizardStep::Layout => 4,
            WizardStep::Summary => 5,
            WizardStep::Payment => 6,
            WizardStep::Complete => 7,
        }
    }

    /// Total number of steps.
    pub fn total() -> usize {
        Self::ALL.len()
    }

    /// The step a back navigation lands on, if any.
    ///
    /// `Start` has nothing before it and `Complete` deliberately offers no
    /// back path (the job is already paid for).
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Start | WizardStep::Complete => None,
            WizardStep::Connection => Some(WizardStep::Start),
            WizardStep::Upload => Some(WizardStep::Connection),
            WizardStep::Layout => Some(WizardStep::Upload),
            WizardStep::Summary => Some(WizardStep::Layout),
            WizardStep::Payment => Some(WizardStep::Summary),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transfer Methods and Connection Timeline
// ─────────────────────────────────────────────────────────────────────────────

/// The simulated document-transfer channel, chosen once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionMethod {
    /// Cloud storage via QR handoff (Google Drive, Dropbox, OneDrive)
    Cloud,
    /// Bluetooth pairing with a nearby phone or tablet
    Bluetooth,
    /// Local USB flash drive
    Usb,
}

impl ConnectionMethod {
    /// Methods in the order they are offered on the Connection screen.
    pub const ALL: [ConnectionMethod; 3] = [
        ConnectionMethod::Cloud,
        ConnectionMethod::Bluetooth,
        ConnectionMethod::Usb,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConnectionMethod::Cloud => "Cloud Storage",
            ConnectionMethod::Bluetooth => "Bluetooth",
            ConnectionMethod::Usb => "USB Drive",
        }
    }

    /// Marketing line shown under the label on the Connection screen.
    pub fn description(&self) -> &'static str {
        match self {
            ConnectionMethod::Cloud => "Google Drive, Dropbox, OneDrive",
            ConnectionMethod::Bluetooth => "Send from your phone or tablet",
            ConnectionMethod::Usb => "Insert your USB flash drive",
        }
    }
}

/// Position on a method's simulated connection timeline.
///
/// Valid values depend on the chosen method:
/// - Bluetooth: `Connecting → Scanning → Pairing → Connected`
/// - Usb: `Connecting → Reading → Ready`
/// - Cloud: `QrCode → Authenticating → Ready`
///
/// The timeline is advanced only by simulator events; the terminal states
/// (`Scanning`, `Ready`, `Connected`) expose something the user can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// No transfer in progress
    #[default]
    Idle,

    /// Searching for the peer (Bluetooth) or detecting the drive (USB)
    Connecting,

    /// Bluetooth scan finished; device listing is selectable
    Scanning,

    /// Pairing with the chosen Bluetooth device
    Pairing,

    /// Bluetooth peer connected; waiting for the user to name a file
    Connected,

    /// Reading the USB drive's file table
    Reading,

    /// File listing is selectable (USB and Cloud)
    Ready,

    /// Showing the cloud handoff QR code and session code
    QrCode,

    /// Cloud login confirmed; fetching the file listing
    Authenticating,
}

impl ConnectionState {
    /// Whether this state exposes a selectable listing.
    pub fn has_listing(&self) -> bool {
        matches!(self, ConnectionState::Scanning | ConnectionState::Ready)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Listing Entries
// ─────────────────────────────────────────────────────────────────────────────

/// Mobile platform tag for a simulated Bluetooth peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
        }
    }
}

/// An item in the listing a simulated transfer produces.
///
/// Devices appear in the Bluetooth scan, files on USB drives and in cloud
/// storage, folders only in cloud storage (and only as inert placeholders).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEntry {
    /// A pairable device found during the Bluetooth scan
    Device { name: String, platform: Platform },

    /// A selectable document with a human-readable size
    File { name: String, size: String },

    /// A folder placeholder with a child-item count; never selectable
    Folder { name: String, items: u32 },
}

impl SourceEntry {
    pub fn device(name: impl Into<String>, platform: Platform) -> Self {
        SourceEntry::Device {
            name: name.into(),
            platform,
        }
    }

    pub fn file(name: impl Into<String>, size: impl Into<String>) -> Self {
        SourceEntry::File {
            name: name.into(),
            size: size.into(),
        }
    }

    pub fn folder(name: impl Into<String>, items: u32) -> Self {
        SourceEntry::Folder {
            name: name.into(),
            items,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SourceEntry::Device { name, .. }
            | SourceEntry::File { name, .. }
            | SourceEntry::Folder { name, .. } => name,
        }
    }

    /// Secondary line shown under the name in listings.
    pub fn detail(&self) -> String {
        match self {
            SourceEntry::Device { platform, .. } => format!("{} Device", platform.label()),
            SourceEntry::File { size, .. } => size.clone(),
            SourceEntry::Folder { items, .. } => format!("{items} items"),
        }
    }

    /// Folders are inert placeholders; everything else can be acted on.
    pub fn is_selectable(&self) -> bool {
        !matches!(self, SourceEntry::Folder { .. })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Print Job Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
    Legal,
    A3,
}

impl PaperSize {
    pub const ALL: [PaperSize; 4] = [
        PaperSize::A4,
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::A3,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::Letter => "Letter",
            PaperSize::Legal => "Legal",
            PaperSize::A3 => "A3",
        }
    }

    /// Physical dimensions shown under the label on the Layout screen.
    pub fn dimensions(&self) -> &'static str {
        match self {
            PaperSize::A4 => "210 × 297 mm",
            PaperSize::Letter => "8.5 × 11 in",
            PaperSize::Legal => "8.5 × 14 in",
            PaperSize::A3 => "297 × 420 mm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Portrait => "Portrait",
            Orientation::Landscape => "Landscape",
        }
    }

    pub fn toggled(&self) -> Orientation {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    #[default]
    BlackWhite,
    Color,
}

impl ColorMode {
    pub fn label(&self) -> &'static str {
        match self {
            ColorMode::BlackWhite => "Black & White",
            ColorMode::Color => "Color",
        }
    }

    pub fn toggled(&self) -> ColorMode {
        match self {
            ColorMode::BlackWhite => ColorMode::Color,
            ColorMode::Color => ColorMode::BlackWhite,
        }
    }
}

/// Which pages of the document to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageMode {
    /// Every page of the (always 10-page) document
    #[default]
    All,
    /// A user-entered textual range such as `"1-5, 8, 10"`
    Range,
}

/// Print layout configuration for the current job.
///
/// Deliberately *not* cleared on session reset: the next customer inherits
/// the previous layout, matching the kiosk's observed behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintJobConfig {
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    pub color_mode: ColorMode,
    pub page_mode: PageMode,
    /// Range text, kept even while `page_mode` is `All` so switching back
    /// and forth preserves the user's input.
    pub page_range: String,
    /// Number of copies, always ≥ 1.
    pub copies: u32,
}

impl Default for PrintJobConfig {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::default(),
            orientation: Orientation::default(),
            color_mode: ColorMode::default(),
            page_mode: PageMode::default(),
            page_range: "1-10".to_string(),
            copies: 1,
        }
    }
}

impl PrintJobConfig {
    pub fn increment_copies(&mut self) {
        self.copies = self.copies.saturating_add(1);
    }

    /// Copies never drop below 1.
    pub fn decrement_copies(&mut self) {
        self.copies = self.copies.saturating_sub(1).max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers_are_sequential() {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.number(), i + 1);
        }
        assert_eq!(WizardStep::total(), 7);
    }

    #[test]
    fn test_back_navigation_chain() {
        assert_eq!(WizardStep::Payment.previous(), Some(WizardStep::Summary));
        assert_eq!(WizardStep::Summary.previous(), Some(WizardStep::Layout));
        assert_eq!(WizardStep::Layout.previous(), Some(WizardStep::Upload));
        assert_eq!(WizardStep::Upload.previous(), Some(WizardStep::Connection));
        assert_eq!(WizardStep::Connection.previous(), Some(WizardStep::Start));
        assert_eq!(WizardStep::Start.previous(), None);
        assert_eq!(WizardStep::Complete.previous(), None);
    }

    #[test]
    fn test_listing_states() {
        assert!(ConnectionState::Scanning.has_listing());
        assert!(ConnectionState::Ready.has_listing());
        assert!(!ConnectionState::Pairing.has_listing());
        assert!(!ConnectionState::Idle.has_listing());
    }

    #[test]
    fn test_folder_entries_are_inert() {
        let folder = SourceEntry::folder("Photos", 156);
        let file = SourceEntry::file("Q4_Report.pdf", "3.2 MB");
        let device = SourceEntry::device("iPad Pro", Platform::Ios);

        assert!(!folder.is_selectable());
        assert!(file.is_selectable());
        assert!(device.is_selectable());
    }

    #[test]
    fn test_entry_details() {
        assert_eq!(
            SourceEntry::device("John's iPhone", Platform::Ios).detail(),
            "iOS Device"
        );
        assert_eq!(SourceEntry::file("a.pdf", "2.4 MB").detail(), "2.4 MB");
        assert_eq!(SourceEntry::folder("Work Documents", 24).detail(), "24 items");
    }

    #[test]
    fn test_copies_floor_at_one() {
        let mut job = PrintJobConfig::default();
        assert_eq!(job.copies, 1);
        job.decrement_copies();
        assert_eq!(job.copies, 1);
        job.increment_copies();
        job.increment_copies();
        assert_eq!(job.copies, 3);
        job.decrement_copies();
        assert_eq!(job.copies, 2);
    }

    #[test]
    fn test_job_config_defaults() {
        let job = PrintJobConfig::default();
        assert_eq!(job.paper_size, PaperSize::A4);
        assert_eq!(job.orientation, Orientation::Portrait);
        assert_eq!(job.color_mode, ColorMode::BlackWhite);
        assert_eq!(job.page_mode, PageMode::All);
        assert_eq!(job.page_range, "1-10");
    }
}
