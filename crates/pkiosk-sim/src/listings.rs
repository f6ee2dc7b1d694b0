//! Fixed fake data produced by the simulated transfers
//!
//! Every timeline ends in the same listing every time; the kiosk mockup
//! has no real peers, drives, or cloud accounts behind it.

use pkiosk_core::{Platform, SourceEntry};

/// Session code displayed next to the cloud handoff QR.
pub const CLOUD_SESSION_CODE: &str = "KS-8247";

/// Fallback URL for users who cannot scan the QR code.
pub const CLOUD_PORTAL_URL: &str = "print.kiosk.com";

/// Devices "found" by the Bluetooth scan.
pub fn bluetooth_devices() -> Vec<SourceEntry> {
    vec![
        SourceEntry::device("John's iPhone", Platform::Ios),
        SourceEntry::device("Samsung Galaxy S23", Platform::Android),
        SourceEntry::device("iPad Pro", Platform::Ios),
    ]
}

/// Files "read" from the USB drive.
pub fn usb_files() -> Vec<SourceEntry> {
    vec![
        SourceEntry::file("Document1.pdf", "2.4 MB"),
        SourceEntry::file("Presentation.pptx", "5.1 MB"),
        SourceEntry::file("Report.docx", "1.8 MB"),
        SourceEntry::file("Image.jpg", "3.2 MB"),
    ]
}

/// Entries "listed" by the cloud provider after authentication.
/// Folders are placeholders only; the user can pick the two files.
pub fn cloud_entries() -> Vec<SourceEntry> {
    vec![
        SourceEntry::folder("Work Documents", 24),
        SourceEntry::file("Q4_Report.pdf", "3.2 MB"),
        SourceEntry::file("Meeting_Notes.docx", "1.1 MB"),
        SourceEntry::folder("Photos", 156),
    ]
}
