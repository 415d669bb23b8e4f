//! Vibe Display - a real-time "now playing" screen for a group of music devices.
//!
//! Devices announce what they play on a shared pub/sub channel. The display
//! follows one primary device, looks the song up in a CSV table, enriches it
//! from Spotify, Tidal and Deezer, and shows the result together with the
//! vibe colours for that group of songs.

pub mod catalog;
pub mod channel;
pub mod cli;
pub mod config;
pub mod error;
pub mod lookup;
pub mod present;
pub mod router;
pub mod session;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Used when `RUST_LOG` is unset. Subsystems log under their own targets.
const DEFAULT_LOG_FILTER: &str =
    "vibe_display=info,router=info,catalog=info,lookup=info,channel=info";

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr; stdout belongs to the display
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run_command(&args)
}
