//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to the platform data directory (e.g.
/// `~/.local/share/print-kiosk/logs/`). The terminal itself belongs to the
/// TUI, so nothing is ever logged to stdout/stderr.
/// Log level is controlled by the `PKIOSK_LOG` environment variable.
///
/// # Examples
/// ```bash
/// PKIOSK_LOG=debug cargo run
/// PKIOSK_LOG=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "pkiosk.log");

    // Default to info, allow override via PKIOSK_LOG
    let env_filter = EnvFilter::try_from_env("PKIOSK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("pkiosk=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Print Kiosk Go starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("print-kiosk").join("logs"))
}
