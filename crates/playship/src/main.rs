//! Playship - Play Store listing preparation CLI

mod cli;
mod exit_codes;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let _guard = init_tracing();
    Cli::parse().execute()
}

/// Console logging filtered by RUST_LOG (default: warn), plus a debug-level
/// JSON file layer under ~/.playship/logs/ when the home directory is
/// writable.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let console = tracing_subscriber::fmt::layer().with_target(false).with_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    );

    let (file, guard) = match log_directory() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(&dir, "playship.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry().with(console).with(file).init();
    guard
}

fn log_directory() -> Option<std::path::PathBuf> {
    let dir = dirs::home_dir()?.join(".playship").join("logs");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}
