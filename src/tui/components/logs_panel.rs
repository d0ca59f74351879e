// Logs panel component
//
// Renders the most recent captured tracing records. Hidden by default,
// toggled with 'l'. This is where fetch failures are visible - the contact
// list itself never shows an error state.

use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the logs panel
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();

    // Most recent entries that fit the panel, oldest first
    let visible = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.get_all();
    let start = entries.len().saturating_sub(visible);

    let width = area.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = entries[start..]
        .iter()
        .map(|entry| {
            let level_color = match entry.level {
                LogLevel::Error => theme.log_error,
                LogLevel::Warn => theme.log_warn,
                LogLevel::Info => theme.log_info,
                LogLevel::Debug => theme.log_debug,
                LogLevel::Trace => theme.log_trace,
            };
            let text = format!(
                "{} {:<5} {}",
                entry.timestamp.format("%H:%M:%S"),
                entry.level.as_str(),
                entry.message,
            );
            Line::from(Span::styled(
                truncate_to_width(&text, width),
                Style::default().fg(level_color),
            ))
        })
        .collect();

    let panel = Paragraph::new(lines).style(theme.base_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(" System Logs "),
    );

    f.render_widget(panel, area);
}
