// Rolodex - Terminal contact viewer
//
// Fetches four random-person records from a remote API, lists their names,
// and shows full details in a modal overlay.
//
// Architecture:
// - Fetch pipeline (reqwest): four sequential GETs against the person source
// - Model: serde wire records + immutable display wrapper
// - TUI (ratatui): contact list, details modal, logs panel
// - Event system: an mpsc channel connects the fetch task to the UI

mod cli;
mod config;
mod demo;
mod events;
mod fetch;
mod logging;
mod model;
mod startup;
mod tui;
mod util;

use anyhow::Result;
use config::{Config, LogRotation};
use events::{AppEvent, CONTACT_COUNT};
use fetch::PersonSource;
use logging::{LogBuffer, TuiLogLayer};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Load configuration first to determine TUI vs headless mode
    let config = Config::from_env();

    // Create log buffer for TUI mode
    let log_buffer = LogBuffer::new();

    // Initialize tracing/logging with conditional output
    // In TUI mode: capture logs to buffer (prevents garbling the display)
    // In headless mode: output logs to stderr
    // File logging: optionally write to rotating log files (in addition to above)
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("rolodex={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Set up file logging if enabled (non-blocking writer with rotation)
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            // Create log directory if it doesn't exist
            if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                // Fall back to non-file logging
                init_subscriber_without_file(&config, &log_buffer, filter);
                None
            } else {
                // Create rolling file appender based on configured rotation
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

                // Wrap in non-blocking writer (writes happen in background thread)
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                // File layer uses JSON format for structured log parsing.
                // Built inline in each branch so its subscriber type parameter can
                // unify with the (differing) layer stack it is attached to.
                if config.enable_tui {
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
                } else {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                }

                Some(guard)
            }
        } else {
            // No file logging - initialize without file layer
            init_subscriber_without_file(&config, &log_buffer, filter);
            None
        };

    // Create the event channel between the fetch task and the UI.
    // Four contacts at most; a small bound is plenty.
    let (event_tx, event_rx) = mpsc::channel(16);

    // Spawn the fetch task (or demo task in demo mode)
    let fetch_handle = if config.demo_mode {
        tracing::info!("Running in DEMO MODE - canned contacts, no network");
        tokio::spawn(async move {
            demo::run_demo(event_tx).await;
        })
    } else {
        let source = PersonSource::new(
            config.api_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )?;
        tokio::spawn(async move {
            fetch::fetch_contacts(source, event_tx).await;
        })
    };

    // Print startup banner AFTER initialization
    startup::print_startup(&config);
    startup::log_startup(&config);

    if config.enable_tui {
        tracing::info!("Starting TUI");
        // Blocks until the user quits (presses 'q')
        if let Err(e) = tui::run_tui(event_rx, log_buffer, config).await {
            tracing::error!("TUI error: {:?}", e);
        }
    } else {
        tracing::info!("TUI disabled, running in headless mode");
        run_headless(event_rx).await?;
    }

    tracing::info!("Shutting down...");

    // The fetch task is finite; wait for it so in-flight sends drain
    let _ = fetch_handle.await;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Initialize the tracing subscriber with no file layer
fn init_subscriber_without_file(config: &Config, log_buffer: &LogBuffer, filter: EnvFilter) {
    if config.enable_tui {
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(log_buffer.clone()))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Headless mode: wait for the four contacts and print them to stdout.
///
/// The list never partially prints: an incomplete fetch produces no contact
/// output, matching the TUI's all-or-loading contract.
async fn run_headless(mut event_rx: mpsc::Receiver<AppEvent>) -> Result<()> {
    let mut contacts: [Option<crate::model::Person>; CONTACT_COUNT] = [None, None, None, None];

    while let Some(event) = event_rx.recv().await {
        match event {
            AppEvent::ContactLoaded { slot, person, .. } => {
                contacts[slot.index()] = Some(person);
                if contacts.iter().all(|c| c.is_some()) {
                    break;
                }
            }
            AppEvent::FetchFailed { message, .. } => {
                anyhow::bail!("contact fetch did not complete: {}", message);
            }
        }
    }

    if contacts.iter().any(|c| c.is_none()) {
        anyhow::bail!("contact fetch ended before all slots were populated");
    }

    println!("Contact List");
    println!("────────────");
    for person in contacts.iter().flatten() {
        println!();
        println!("{}", tui::views::format_contact_details(person));
    }

    Ok(())
}
