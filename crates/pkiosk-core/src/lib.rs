//! # pkiosk-core - Core Domain Types
//!
//! Foundation crate for Print Kiosk Go. Provides the wizard domain types,
//! pricing and payment arithmetic, transfer events, error handling, and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, rand, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`WizardStep`] - One screen of the linear wizard flow
//! - [`ConnectionMethod`], [`ConnectionState`] - Simulated transfer channel and timeline
//! - [`SourceEntry`] - Tagged listing entry (device, file, or folder)
//! - [`PrintJobConfig`] - Paper, orientation, color, pages, copies
//!
//! ### Pricing (`pricing`)
//! - [`parse_page_range()`] - Strict page-range parser
//! - [`cost_summary()`] - Pages × copies × per-page rate, in whole pesos
//!
//! ### Payment (`payment`)
//! - [`CashAcceptor`] - Coin accumulator with settle/change/remaining queries
//! - [`wallet_reference()`] - Display-only GCash transaction reference
//!
//! ### Events (`events`)
//! - [`TransferEvent`] - Progress reports from the simulated timelines
//! - [`TransferId`] - Per-attempt identity guarding against stale events
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pkiosk_core::prelude::*;
//! ```

pub mod error;
pub mod events;
pub mod logging;
pub mod payment;
pub mod pricing;
pub mod types;

/// Prelude for common imports used throughout all Print Kiosk Go crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{ConnectionError, Error, PageRangeError, PaymentError, Result};
pub use events::{TransferEvent, TransferId};
pub use payment::{
    wallet_reference, wallet_reference_with, CashAcceptor, PaymentMethod, COIN_DENOMINATIONS,
};
pub use pricing::{
    cost_summary, page_count, parse_page_range, CostSummary, PriceList, DOCUMENT_PAGES,
};
pub use types::{
    ColorMode, ConnectionMethod, ConnectionState, Orientation, PageMode, PaperSize, Platform,
    PrintJobConfig, SourceEntry, WizardStep,
};
