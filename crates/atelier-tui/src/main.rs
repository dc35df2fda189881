//! `atelier-tui` — Terminal browser for a WordPress.com photography portfolio.
//!
//! Built on [ratatui](https://ratatui.rs) over the view pipeline in
//! `atelier-core`: a cover grid, per-collection galleries, a full-screen
//! lightbox with wraparound navigation, and the contact form.
//!
//! Logs are written to a file (default `/tmp/atelier-tui.log`) to avoid
//! corrupting the terminal UI. A background task performs the one startup
//! fetch against the content API and feeds the TUI action loop.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app launch.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;

/// Terminal browser for a photography portfolio.
#[derive(Parser, Debug)]
#[command(name = "atelier-tui", version, about)]
struct Cli {
    /// Site domain (overrides config), e.g. example.wordpress.com
    #[arg(short = 's', long, env = "ATELIER_SITE__DOMAIN")]
    site: Option<String>,

    /// Log file path (defaults to /tmp/atelier-tui.log)
    #[arg(long, default_value = "/tmp/atelier-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("atelier_tui={log_level}")));

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("atelier-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    let mut config = atelier_config::load_config_or_default();
    if let Some(site) = cli.site {
        config.site.domain = site;
    }

    info!(site = %config.site.domain, "starting atelier-tui");

    let mut app = App::new(config);
    app.run().await?;

    Ok(())
}
