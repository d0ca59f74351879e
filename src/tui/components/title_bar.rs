// Title bar component
//
// Renders the app title with a load-progress indicator while the contact
// slots are still filling.

use crate::events::CONTACT_COUNT;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();

    let title_text = if app.is_loading() {
        format!(
            " Rolodex {} loading {}/{}",
            app.spinner_char(),
            app.loaded_count(),
            CONTACT_COUNT
        )
    } else {
        " Rolodex".to_string()
    };

    let title = Paragraph::new(title_text).style(theme.title_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title_top(ratatui::text::Line::from(" ? ").right_aligned()),
    );

    f.render_widget(title, area);
}
