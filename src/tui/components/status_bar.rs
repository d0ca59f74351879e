// Status bar component
//
// Renders session info at the bottom: uptime, load progress, key hints.
// Adapts to terminal width via the breakpoint system.

use crate::events::CONTACT_COUNT;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();
    let bp = Breakpoint::from_width(area.width);

    let progress = format!("{}/{}", app.loaded_count(), CONTACT_COUNT);

    let status_text = if bp.at_least(Breakpoint::Normal) {
        format!(
            " {} │ contacts {} │ ↑/↓ select │ Enter details │ t theme ({}) │ l logs │ q quit",
            app.uptime(),
            progress,
            app.theme.name(),
        )
    } else {
        // Compact format for narrow terminals
        format!(" {} │ {} │ ↵ │ q", app.uptime(), progress)
    };

    let status = Paragraph::new(status_text).style(theme.status_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style()),
    );

    f.render_widget(status, area);
}
