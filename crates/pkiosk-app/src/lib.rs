//! # pkiosk-app - Application State and Orchestration
//!
//! The TEA-style heart of Print Kiosk Go: an owned [`state::AppState`]
//! record, a [`message::Message`] enum, and a pure
//! [`handler::update`] function returning follow-up messages and
//! [`handler::UpdateAction`]s. The [`process`] module runs the update
//! loop and dispatches actions by spawning (or aborting) simulator tasks.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod state;

pub use config::{load_settings, Settings};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::{process_message, TransferTasks};
pub use state::{AppPhase, AppState, ConnectionFlow, LayoutField, PaymentFlow, UiState};
