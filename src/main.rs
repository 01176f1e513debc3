//! medforecast: medication stock prediction log
//!
//! Main entry point for the terminal application.

use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use medforecast::config::{AppConfig, LogMode};
use medforecast::tui::App;

fn main() -> Result<()> {
    let config = AppConfig::from_env_or_default();

    // Writing logs to the terminal would corrupt the TUI (alternate screen),
    // so an interactive session logs to a file and anything else to stdout.
    let use_file = match config.log_mode {
        LogMode::File => true,
        LogMode::Stdout => false,
        LogMode::Auto => std::io::stdout().is_terminal(),
    };

    let (writer, _guard) = if use_file {
        if let Some(parent) = config.log_file.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(!use_file),
        )
        .init();

    tracing::info!("Starting medforecast...");

    let mut app = App::new(&config)?;
    app.run()?;

    tracing::info!("medforecast shutdown complete.");
    Ok(())
}
