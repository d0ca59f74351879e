// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Rendering the UI
// - Receiving fetch events and updating the display

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod theme;
pub mod views;

use crate::config::Config;
use crate::events::{AppEvent, ContactSlot};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use theme::ThemeKind;
use tokio::sync::mpsc;

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done. The event loop handles both keyboard input and fetch events.
pub async fn run_tui(
    mut event_rx: mpsc::Receiver<AppEvent>,
    log_buffer: LogBuffer,
    config: Config,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Create app state with the configured theme
    let mut app = App::with_theme(log_buffer, ThemeKind::from_name(&config.theme));

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut event_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles three types of events:
/// 1. Keyboard input (for navigation and commands)
/// 2. Timer ticks (for periodic redraws and the spinner animation)
/// 3. Fetch events (for populating the contact slots)
///
/// The use of tokio::select! allows us to wait on multiple async operations
/// simultaneously, responding to whichever one completes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::Receiver<AppEvent>,
) -> Result<()> {
    // Ticker for periodic redraws; also paces the loading spinner
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    loop {
        // Draw the UI
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        // Wait for events using tokio::select!
        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            // Fetch events
            Some(fetch_event) = event_rx.recv() => {
                app.apply_event(fetch_event);
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → List
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Global keys (quit, help, theme, logs)
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 3: List keys
    let key = key_event.code;
    match key_event.kind {
        KeyEventKind::Press => {
            if !app.handle_key_press(key) {
                return;
            }
            match key {
                KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                KeyCode::Enter => app.open_details(),
                // Digit shortcuts map straight to slots
                KeyCode::Char(c @ '1'..='4') => {
                    let index = (c as usize) - ('1' as usize);
                    if let Some(slot) = ContactSlot::from_index(index) {
                        app.open_details_for(slot);
                    }
                }
                _ => {}
            }
        }
        KeyEventKind::Release => {
            app.handle_key_release(key);
        }
        _ => {}
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    // Always process Release events to keep InputHandler in sync.
    // Without this, keys get stuck in "pressed" state after modal closes.
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true; // Modal absorbs other non-press events (Repeat, etc.)
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
        ModalAction::CopyReadable => {
            if let Some(person) = app.selected_person() {
                let text = views::format_contact_details(person);
                if let Err(e) = clipboard::copy_to_clipboard(&text) {
                    tracing::warn!("Clipboard copy failed: {:#}", e);
                }
            }
        }
        ModalAction::CopyJson => {
            if let Some(slot) = modal.slot() {
                if let Some(person) = app.contacts[slot.index()].as_ref() {
                    match serde_json::to_string_pretty(person) {
                        Ok(json) => {
                            if let Err(e) = clipboard::copy_to_clipboard(&json) {
                                tracing::warn!("Clipboard copy failed: {:#}", e);
                            }
                        }
                        Err(e) => tracing::warn!("Contact serialization failed: {}", e),
                    }
                }
            }
        }
    }

    true // Modal absorbed the input
}

/// Handle global keys - returns true if handled
/// Global keys work the same with or without the list focused
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        // Help modal
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::help());
            }
            true
        }
        // Theme cycling
        KeyCode::Char('t') => {
            if app.handle_key_press(key) {
                app.next_theme();
            }
            true
        }
        // Logs panel
        KeyCode::Char('l') => {
            if app.handle_key_press(key) {
                app.toggle_logs();
            }
            true
        }
        _ => false,
    }
}
