//! Scripted connection timelines
//!
//! Each transfer attempt runs as one spawned task that sleeps through the
//! scripted delays and reports progress over an mpsc channel. The task
//! holds no state of its own; cancelling it (aborting the join handle) is
//! always safe, and every signal carries the attempt's [`TransferId`] so
//! the receiver can drop stragglers from an abandoned attempt.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use pkiosk_core::{ConnectionMethod, TransferEvent, TransferId};

use crate::listings;

// Scripted delays, in milliseconds, mimicking real hardware latency.
pub const BLUETOOTH_SCAN_MS: u64 = 1500;
pub const BLUETOOTH_PAIR_MS: u64 = 2000;
pub const USB_DETECT_MS: u64 = 1000;
pub const USB_READ_MS: u64 = 1500;
pub const CLOUD_QR_MS: u64 = 5000;
pub const CLOUD_AUTH_MS: u64 = 2000;

/// Settle delay after picking a file from a listing.
pub const SELECT_FILE_MS: u64 = 800;
/// Settle delay after naming the file received over Bluetooth.
pub const BLUETOOTH_UPLOAD_MS: u64 = 500;

/// Multiplier applied to every scripted delay.
///
/// `1.0` is the kiosk's production pacing; demos and tests compress it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub time_scale: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self { time_scale: 1.0 }
    }
}

impl Timing {
    pub fn scaled(&self, ms: u64) -> Duration {
        Duration::from_millis((ms as f64 * self.time_scale.max(0.0)) as u64)
    }
}

/// One progress signal from a timeline task.
#[derive(Debug, Clone)]
pub struct TransferSignal {
    pub id: TransferId,
    pub event: TransferEvent,
}

/// Sender half used by timeline tasks to report progress.
pub type TransferSender = mpsc::Sender<TransferSignal>;

async fn emit(tx: &TransferSender, id: TransferId, event: TransferEvent) {
    // The receiver dropping mid-timeline means the UI is shutting down;
    // nothing left to report to.
    if tx.send(TransferSignal { id, event }).await.is_err() {
        debug!("{id}: receiver gone, dropping timeline signal");
    }
}

/// Spawn the scripted timeline for a chosen transfer method.
///
/// Bluetooth stops at the device listing; pairing continues via
/// [`spawn_pairing`] once the user picks a device. USB and Cloud run
/// through to their final listing.
pub fn spawn_timeline(
    id: TransferId,
    method: ConnectionMethod,
    timing: Timing,
    tx: TransferSender,
) -> JoinHandle<()> {
    debug!("{id}: starting {} timeline", method.label());
    tokio::spawn(async move {
        match method {
            ConnectionMethod::Bluetooth => {
                tokio::time::sleep(timing.scaled(BLUETOOTH_SCAN_MS)).await;
                emit(
                    &tx,
                    id,
                    TransferEvent::DevicesDiscovered {
                        devices: listings::bluetooth_devices(),
                    },
                )
                .await;
            }
            ConnectionMethod::Usb => {
                tokio::time::sleep(timing.scaled(USB_DETECT_MS)).await;
                emit(&tx, id, TransferEvent::MediaMounted).await;
                tokio::time::sleep(timing.scaled(USB_READ_MS)).await;
                emit(
                    &tx,
                    id,
                    TransferEvent::ListingReady {
                        entries: listings::usb_files(),
                    },
                )
                .await;
            }
            ConnectionMethod::Cloud => {
                tokio::time::sleep(timing.scaled(CLOUD_QR_MS)).await;
                emit(&tx, id, TransferEvent::QrScanned).await;
                tokio::time::sleep(timing.scaled(CLOUD_AUTH_MS)).await;
                emit(
                    &tx,
                    id,
                    TransferEvent::ListingReady {
                        entries: listings::cloud_entries(),
                    },
                )
                .await;
            }
        }
    })
}

/// Spawn the Bluetooth pairing leg for an already-discovered device.
pub fn spawn_pairing(id: TransferId, timing: Timing, tx: TransferSender) -> JoinHandle<()> {
    debug!("{id}: pairing");
    tokio::spawn(async move {
        tokio::time::sleep(timing.scaled(BLUETOOTH_PAIR_MS)).await;
        emit(&tx, id, TransferEvent::Paired).await;
    })
}

/// Spawn the short settle delay between picking a document and advancing
/// to the layout screen.
pub fn spawn_selection_confirm(
    id: TransferId,
    delay_ms: u64,
    timing: Timing,
    tx: TransferSender,
) -> JoinHandle<()> {
    debug!("{id}: selection confirmed, settling for {delay_ms}ms");
    tokio::spawn(async move {
        tokio::time::sleep(timing.scaled(delay_ms)).await;
        emit(&tx, id, TransferEvent::SelectionConfirmed).await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkiosk_core::SourceEntry;

    /// Timelines in tests run with all delays compressed to zero.
    const INSTANT: Timing = Timing { time_scale: 0.0 };

    async fn collect(mut rx: mpsc::Receiver<TransferSignal>) -> Vec<TransferSignal> {
        let mut signals = Vec::new();
        while let Some(signal) = rx.recv().await {
            signals.push(signal);
        }
        signals
    }

    #[test]
    fn test_timing_scales_delays() {
        let timing = Timing { time_scale: 0.5 };
        assert_eq!(timing.scaled(1000), Duration::from_millis(500));
        assert_eq!(INSTANT.scaled(5000), Duration::ZERO);
        // Negative scales are clamped rather than panicking.
        let timing = Timing { time_scale: -1.0 };
        assert_eq!(timing.scaled(1000), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_bluetooth_timeline_ends_at_device_listing() {
        let (tx, rx) = mpsc::channel(8);
        spawn_timeline(TransferId(1), ConnectionMethod::Bluetooth, INSTANT, tx)
            .await
            .unwrap();

        let signals = collect(rx).await;
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].id, TransferId(1));
        match &signals[0].event {
            TransferEvent::DevicesDiscovered { devices } => {
                assert_eq!(devices.len(), 3);
                assert!(devices
                    .iter()
                    .all(|d| matches!(d, SourceEntry::Device { .. })));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_usb_timeline_sequence() {
        let (tx, rx) = mpsc::channel(8);
        spawn_timeline(TransferId(2), ConnectionMethod::Usb, INSTANT, tx)
            .await
            .unwrap();

        let signals = collect(rx).await;
        assert_eq!(signals.len(), 2);
        assert!(matches!(signals[0].event, TransferEvent::MediaMounted));
        match &signals[1].event {
            TransferEvent::ListingReady { entries } => assert_eq!(entries.len(), 4),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cloud_timeline_sequence() {
        let (tx, rx) = mpsc::channel(8);
        spawn_timeline(TransferId(3), ConnectionMethod::Cloud, INSTANT, tx)
            .await
            .unwrap();

        let signals = collect(rx).await;
        assert_eq!(signals.len(), 2);
        assert!(matches!(signals[0].event, TransferEvent::QrScanned));
        match &signals[1].event {
            TransferEvent::ListingReady { entries } => {
                assert_eq!(entries.iter().filter(|e| e.is_selectable()).count(), 2);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_pairing_emits_paired() {
        let (tx, rx) = mpsc::channel(8);
        spawn_pairing(TransferId(4), INSTANT, tx).await.unwrap();

        let signals = collect(rx).await;
        assert_eq!(signals.len(), 1);
        assert!(matches!(signals[0].event, TransferEvent::Paired));
    }

    #[tokio::test]
    async fn test_selection_confirm_carries_attempt_id() {
        let (tx, rx) = mpsc::channel(8);
        spawn_selection_confirm(TransferId(5), SELECT_FILE_MS, INSTANT, tx)
            .await
            .unwrap();

        let signals = collect(rx).await;
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].id, TransferId(5));
        assert!(matches!(signals[0].event, TransferEvent::SelectionConfirmed));
    }

    #[tokio::test]
    async fn test_dropped_receiver_does_not_panic() {
        let (tx, rx) = mpsc::channel(8);
        drop(rx);
        spawn_timeline(TransferId(6), ConnectionMethod::Usb, INSTANT, tx)
            .await
            .unwrap();
    }
}
