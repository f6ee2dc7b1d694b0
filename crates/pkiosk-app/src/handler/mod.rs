//! Handler module - TEA update function and key handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per wizard step

pub(crate) mod keys;
pub(crate) mod update;


use pkiosk_core::{ConnectionMethod, TransferId};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

// Re-export functions used by internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
///
/// The update function never spawns tasks itself; it stays pure so the
/// handler tests can drive the whole wizard without a runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Start the scripted timeline for a chosen transfer method
    StartTransfer {
        id: TransferId,
        method: ConnectionMethod,
    },

    /// Start the Bluetooth pairing leg for the chosen device
    StartPairing { id: TransferId },

    /// Start the settle delay between picking a document and the
    /// Layout screen
    ConfirmSelection { id: TransferId, delay_ms: u64 },

    /// Abort whatever timeline task is in flight
    CancelTransfer,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
