//! Events emitted by the simulated transfer timelines
//!
//! The simulator crate runs one scripted timeline per transfer attempt and
//! reports progress through these events. Every event carries the
//! [`TransferId`] of the attempt that produced it; the application ignores
//! events whose id no longer matches the current attempt, which makes
//! late events from a cancelled timeline inert.

use crate::error::ConnectionError;
use crate::types::SourceEntry;

/// Identity of one transfer attempt.
///
/// A fresh id is allocated every time the user picks a transfer method,
/// so an aborted timeline's stragglers can never mutate a later attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransferId(pub u64);

impl std::fmt::Display for TransferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "transfer-{}", self.0)
    }
}

/// Progress report from a simulated transfer timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferEvent {
    /// Bluetooth scan finished; these devices are now pairable
    DevicesDiscovered { devices: Vec<SourceEntry> },

    /// Bluetooth pairing finished; the peer is connected
    Paired,

    /// USB drive detected; the file table is being read
    MediaMounted,

    /// Cloud QR code was scanned; authenticating with the provider
    QrScanned,

    /// Final listing is available for selection (USB and Cloud)
    ListingReady { entries: Vec<SourceEntry> },

    /// The post-selection settle delay elapsed; advance to layout
    SelectionConfirmed,

    /// The timeline failed. Unused by the scripted timelines, which
    /// always succeed, but handled by the application as a recoverable
    /// state on the Upload screen.
    Failed { error: ConnectionError },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_id_display() {
        assert_eq!(TransferId(3).to_string(), "transfer-3");
    }

    #[test]
    fn test_transfer_ids_compare_by_value() {
        assert_eq!(TransferId(1), TransferId(1));
        assert_ne!(TransferId(1), TransferId(2));
    }
}
