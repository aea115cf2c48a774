//! # Plainpad - A Minimal Text Editor
//!
//! One window, one document: Save, Load, a filename label that shows
//! unsaved edits, and a line counter.
//!
//! ```bash
//! cargo run
//!
//! # With diagnostics on stderr
//! cargo run -- -vv
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use plainpad_core::Config;

/// Plainpad - a minimal text editor
#[derive(Parser, Debug)]
#[command(name = "plainpad")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level(args.verbose),
        ))
        .init();

    tracing::info!("Starting Plainpad v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load();

    plainpad_ui::run(config).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
