// Views module - screen-level rendering logic
//
// The contact viewer has one screen: the contact list (or its loading
// state), framed by the title and status bars, with an optional logs panel
// and modal overlays on top. This module owns the frame layout and
// dispatches each region to its renderer.

mod contacts;
mod modal;

pub(crate) use contacts::format_contact_details;

use super::app::App;
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to the entire frame
    let theme = app.theme.theme();
    let bg_block = Block::default().style(Style::default().bg(theme.bg));
    f.render_widget(bg_block, f.area());

    // Shell layout: title bar, content, optional logs panel, status bar
    let constraints = if app.show_logs {
        vec![
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(8),
            Constraint::Length(3),
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    components::render_title_bar(f, chunks[0], app);
    contacts::render(f, chunks[1], app);

    if app.show_logs {
        components::render_logs_panel(f, chunks[2], app);
        components::render_status_bar(f, chunks[3], app);
    } else {
        components::render_status_bar(f, chunks[2], app);
    }

    // Render modal overlay (on top of everything)
    if let Some(modal_state) = app.modal {
        modal::render(f, &modal_state, app);
    }
}
