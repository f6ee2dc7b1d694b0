//! Application error types
//!
//! The kiosk's simulated operations never fail on their own, but the error
//! taxonomy models the failures a real terminal would surface (connection
//! drops, malformed page ranges, payment rejections) as explicit,
//! recoverable states instead of silent stalls.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// A failure on the simulated transfer channel.
///
/// The scripted timelines always succeed; these exist so the application
/// layer has a recoverable error path to route to the Upload screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConnectionError {
    #[error("device not found")]
    DeviceNotFound,

    #[error("pairing rejected by device")]
    PairingRejected,

    #[error("transfer timed out")]
    TransferTimeout,
}

/// A malformed page-range expression.
///
/// Parsing is strict: any bad token rejects the whole expression. The
/// Layout screen surfaces the error inline and blocks forward navigation
/// until the range parses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRangeError {
    #[error("enter at least one page or range")]
    Empty,

    #[error("empty entry in page range")]
    EmptyToken,

    #[error("'{token}' is not a page number")]
    InvalidNumber { token: String },

    #[error("page numbers start at 1")]
    ZeroPage,

    #[error("range {start}-{end} is reversed")]
    ReversedSpan { start: u32, end: u32 },
}

/// A rejected payment interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("unsupported coin: {value} pesos")]
    UnsupportedCoin { value: u32 },

    #[error("amount due already covered")]
    AcceptorClosed,

    #[error("{remaining} pesos still due")]
    InsufficientFunds { remaining: u32 },
}

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Domain Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),

    #[error("Page range error: {0}")]
    PageRange(#[from] PageRangeError),

    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error (surfaced to the user on the
    /// current screen rather than tearing down the session).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Connection(_)
                | Error::PageRange(_)
                | Error::Payment(_)
                | Error::ChannelSend { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Terminal { .. } | Error::ChannelClosed | Error::Io(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::config("missing pricing table");
        assert_eq!(err.to_string(), "Configuration error: missing pricing table");

        let err: Error = PaymentError::InsufficientFunds { remaining: 7 }.into();
        assert!(err.to_string().contains("7 pesos still due"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_domain_errors_are_recoverable() {
        assert!(Error::from(ConnectionError::PairingRejected).is_recoverable());
        assert!(Error::from(PageRangeError::ZeroPage).is_recoverable());
        assert!(Error::from(PaymentError::AcceptorClosed).is_recoverable());
        assert!(!Error::ChannelClosed.is_recoverable());
    }

    #[test]
    fn test_infrastructure_errors_are_fatal() {
        assert!(Error::terminal("broken pipe").is_fatal());
        assert!(Error::ChannelClosed.is_fatal());
        assert!(!Error::from(PageRangeError::Empty).is_fatal());
    }

    #[test]
    fn test_page_range_error_messages() {
        assert_eq!(
            PageRangeError::ReversedSpan { start: 5, end: 2 }.to_string(),
            "range 5-2 is reversed"
        );
        assert_eq!(
            PageRangeError::InvalidNumber {
                token: "abc".to_string()
            }
            .to_string(),
            "'abc' is not a page number"
        );
    }
}
