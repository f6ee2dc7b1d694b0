//! # pkiosk-sim - Simulated Hardware for Print Kiosk Go
//!
//! The kiosk mockup has no real Bluetooth radio, USB port, or cloud
//! account behind it. This crate stands in for all of them: each transfer
//! method has a scripted timeline of state transitions separated by fixed
//! delays, ending in a hard-coded listing. Timelines run as individually
//! spawned tokio tasks reporting over an mpsc channel, so the application
//! can abort one mid-flight when the user navigates away.

pub mod connection;
pub mod listings;

pub use connection::{
    spawn_pairing, spawn_selection_confirm, spawn_timeline, Timing, TransferSender,
    TransferSignal, BLUETOOTH_UPLOAD_MS, SELECT_FILE_MS,
};
pub use listings::{CLOUD_PORTAL_URL, CLOUD_SESSION_CODE};
