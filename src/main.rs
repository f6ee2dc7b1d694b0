//! Print Kiosk Go - a terminal mockup of a self-service printing kiosk
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;

/// Print Kiosk Go - a terminal mockup of a self-service printing kiosk
#[derive(Parser, Debug)]
#[command(name = "pkiosk")]
#[command(
    about = "A terminal mockup of a self-service document printing kiosk",
    long_about = None
)]
struct Args {
    /// Path to an alternate config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Compress the simulated hardware delays (demo pacing)
    #[arg(long)]
    fast: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    pkiosk_core::logging::init()?;

    let args = Args::parse();

    let mut settings = pkiosk_app::load_settings(args.config.as_deref());
    if args.fast {
        settings.simulation.time_scale = 0.1;
        tracing::info!("Fast mode: simulated delays compressed to 10%");
    }

    pkiosk_tui::run(settings).await?;
    Ok(())
}
