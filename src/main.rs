// folio - terminal portfolio viewer
//
// Renders a personal portfolio document in the terminal with the full set of
// page interaction behaviors: a collapsible navigation sidebar with a focus
// trap, smooth scrolling with active-link tracking, a typewriter hero line,
// a certificate lightbox, scroll-triggered card reveals, lazy artwork
// loading with an error placeholder, and a copy-email affordance.
//
// Architecture:
// - Portfolio document (TOML): sections, cards, certificates, contact
// - Components: each behavior owns only the state it manages
// - TUI (ratatui): tokio event loop + layered input dispatch
// - Logging: tracing captured in-memory for the logs modal, with optional
//   rotating JSON log files

mod cli;
mod config;
mod logging;
mod portfolio;
mod theme;
mod tui;
mod util;

use anyhow::Result;
use cli::CliAction;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use portfolio::Portfolio;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    let (portfolio_path, demo) = match cli::handle_cli() {
        CliAction::Handled => return Ok(()),
        CliAction::Run { portfolio, demo } => (portfolio, demo),
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::from_env();

    // Logs are captured to a buffer for the logs modal - writing them to
    // stdout would break through the alternate screen and garble the UI.
    let log_buffer = LogBuffer::new();

    // Precedence: RUST_LOG env var > config file level
    let default_filter = format!("folio={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Optional rotating file logging (JSON for structured parsing).
    // The guard must be kept alive for the duration of the program.
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .init();
                None
            } else {
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();
                Some(guard)
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    // Load the document before entering the terminal, so parse errors
    // print as normal errors instead of being lost to the alternate screen
    let portfolio = match (&portfolio_path, demo) {
        (Some(path), false) => Portfolio::load(path)?,
        _ => Portfolio::demo(),
    };

    tracing::info!(
        "folio {} starting ({} sections)",
        config::VERSION,
        portfolio.sections.len()
    );

    tui::run_tui(config, portfolio, log_buffer).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
