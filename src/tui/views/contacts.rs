// Contact list view
//
// While any slot is unpopulated, shows a centered spinner (the list never
// partially renders). Once all four contacts are in, shows the titled list
// of formatted names with the cursor row highlighted.

use crate::model::Person;
use crate::tui::app::App;
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the content area: loading indicator or the contact list
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.is_loading() {
        render_loading(f, area, app);
    } else {
        render_list(f, area, app);
    }
}

/// Centered indeterminate spinner, shown until all four slots populate.
/// A halted fetch pipeline leaves this on screen indefinitely.
fn render_loading(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Contact List ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Center the spinner vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(inner);

    let spinner = Paragraph::new(Line::from(Span::styled(
        app.spinner_char().to_string(),
        Style::default().fg(theme.spinner),
    )))
    .alignment(Alignment::Center);

    f.render_widget(spinner, chunks[1]);
}

/// The four contact rows, labeled with each person's formatted name
fn render_list(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();
    let width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = app
        .contacts
        .iter()
        .flatten()
        .map(|person| {
            ListItem::new(truncate_to_width(&person.formatted_name(), width))
                .style(theme.base_style())
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Contact List "),
        )
        .highlight_style(theme.selected_style())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.cursor));

    f.render_stateful_widget(list, area, &mut state);
}

/// Plain-text rendering of one contact, used for clipboard copy
pub(crate) fn format_contact_details(person: &Person) -> String {
    format!(
        "Name: {}\nEmail: {}\nCell: {}\nLocation: {}\nPortrait: {}\n",
        person.formatted_name(),
        person.email,
        person.cell,
        person.formatted_location(),
        person.portrait_large_url(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PersonRecord;

    #[test]
    fn contact_details_text_lists_all_fields() {
        let record: PersonRecord = serde_json::from_value(serde_json::json!({
            "gender": "male",
            "email": "omar.haugen@example.com",
            "name": { "title": "Mr", "first": "Omar", "last": "Haugen" },
            "location": {
                "street": { "number": 12, "name": "Storgata" },
                "postcode": "0155",
                "city": "Oslo",
                "state": "Oslo",
                "country": "Norway"
            },
            "cell": "913-52-708"
        }))
        .unwrap();
        let person = Person::new(record);

        let text = format_contact_details(&person);
        assert!(text.contains("Name: Mr Omar Haugen"));
        assert!(text.contains("Email: omar.haugen@example.com"));
        assert!(text.contains("Cell: 913-52-708"));
        assert!(text.contains("Location: 12 Storgata 0155, Oslo,  Oslo, Norway"));
        // No picture block: the portrait line is present but empty
        assert!(text.contains("Portrait: \n"));
    }
}
