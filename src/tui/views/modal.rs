// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Details modal: full contact details for the selected slot
// - Help modal: keyboard shortcuts

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Details(slot) => render_details(f, app, slot.index()),
        Modal::Help => render_help(f, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the contact details modal
fn render_details(f: &mut Frame, app: &App, slot_index: usize) {
    let theme = app.theme.theme();

    // The modal only exists for a populated slot; a missing person here
    // means the state was torn down under us, so render nothing
    let Some(person) = app.contacts[slot_index].as_ref() else {
        return;
    };

    let field = |label: &str, value: String| -> Line {
        Line::from(vec![
            Span::styled(format!(" {}: ", label), theme.label_style()),
            Span::styled(value, theme.value_style()),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        field("Name", person.formatted_name()),
        field("Email", person.email.clone()),
        field("Cell", person.cell.clone()),
        field("Location", person.formatted_location()),
        Line::raw(""),
        // Terminals don't render images; show the URL (empty when the
        // record carried no picture, same as the guarded image source)
        field("Portrait", person.portrait_large_url().to_string()),
    ]);

    // Size to the terminal
    let bp = Breakpoint::from_width(f.area().width);
    let width = match bp {
        Breakpoint::Compact => f.area().width.saturating_sub(4),
        Breakpoint::Normal => 60,
        Breakpoint::Wide => 72,
    };
    let area = centered_rect(width, 12, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.title_style())
                .title(" Full Contact Details ")
                .title_bottom(Line::from(" y copy · Y copy JSON · Esc close ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let theme = app.theme.theme();

    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<10}", key), theme.title_style()),
            Span::styled(desc.to_string(), theme.value_style()),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        kb("↑/↓, j/k", "Select contact"),
        kb("Enter", "Open contact details"),
        kb("1-4", "Open details for that row"),
        kb("Esc", "Close dialog"),
        Line::raw(""),
        kb("y / Y", "Copy contact (text / JSON)"),
        kb("t", "Cycle theme"),
        kb("l", "Toggle logs panel"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("    Theme: ", theme.value_style()),
            Span::styled(app.theme.name(), theme.title_style()),
        ]),
    ]);

    let area = centered_rect(40, 16, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.title_style())
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
