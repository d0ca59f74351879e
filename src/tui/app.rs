// TUI application state
//
// This module manages the state of the contact viewer: the four contact
// slots, the list cursor, and the modal overlay. Transitions are named
// methods so the state machine reads off this file:
//
//   Loading --contact_loaded x4--> Ready --open_details--> ModalOpen
//   ModalOpen --close_modal--> Ready

use super::input::InputHandler;
use super::modal::Modal;
use super::theme::ThemeKind;
use crate::events::{AppEvent, ContactSlot, CONTACT_COUNT};
use crate::logging::LogBuffer;
use crate::model::Person;
use std::time::Instant;

/// Spinner animation frames for the loading indicator
const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Main application state for the TUI
pub struct App {
    /// The four contact slots, populated exactly once each by the fetch task
    pub contacts: [Option<Person>; CONTACT_COUNT],

    /// Highlighted row in the contact list
    pub cursor: usize,

    /// Active modal overlay; None means the list has focus.
    /// A details modal existing implies a selected contact - the invariant
    /// lives in the type, not in a separate flag.
    pub modal: Option<Modal>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether the logs panel is visible
    pub show_logs: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    /// Log buffer for the logs panel
    pub log_buffer: LogBuffer,

    /// Current color theme
    pub theme: ThemeKind,

    /// Animation frame counter for the loading spinner
    spinner_frame: usize,
}

impl App {
    pub fn new() -> Self {
        Self::with_log_buffer(LogBuffer::new())
    }

    pub fn with_log_buffer(log_buffer: LogBuffer) -> Self {
        Self {
            contacts: [None, None, None, None],
            cursor: 0,
            modal: None,
            should_quit: false,
            show_logs: false,
            start_time: Instant::now(),
            input_handler: InputHandler::default(),
            log_buffer,
            theme: ThemeKind::default(),
            spinner_frame: 0,
        }
    }

    pub fn with_theme(log_buffer: LogBuffer, theme: ThemeKind) -> Self {
        Self {
            theme,
            ..Self::with_log_buffer(log_buffer)
        }
    }

    // ───────────────────────────────────────────────────────────────────────
    // State machine transitions
    // ───────────────────────────────────────────────────────────────────────

    /// Apply an event from the fetch task
    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ContactLoaded { slot, person, .. } => {
                self.contact_loaded(slot, person);
            }
            AppEvent::FetchFailed { .. } => {
                // The pipeline already logged the cause. No slot changes,
                // so the spinner keeps rendering; there is no error state.
            }
        }
    }

    /// Populate one contact slot. Each slot is written exactly once per run.
    pub fn contact_loaded(&mut self, slot: ContactSlot, person: Person) {
        self.contacts[slot.index()] = Some(person);
    }

    /// Loading state: at least one slot is unpopulated
    pub fn is_loading(&self) -> bool {
        self.contacts.iter().any(|slot| slot.is_none())
    }

    /// Open the details modal for the slot under the cursor
    pub fn open_details(&mut self) {
        if self.is_loading() {
            return;
        }
        if let Some(slot) = ContactSlot::from_index(self.cursor) {
            self.modal = Some(Modal::details(slot));
        }
    }

    /// Open the details modal for a specific slot (digit shortcuts)
    pub fn open_details_for(&mut self, slot: ContactSlot) {
        if self.is_loading() {
            return;
        }
        self.cursor = slot.index();
        self.modal = Some(Modal::details(slot));
    }

    /// Close any open modal; the list is unchanged
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// The person shown by the details modal, if one is open
    pub fn selected_person(&self) -> Option<&Person> {
        match self.modal {
            Some(Modal::Details(slot)) => self.contacts[slot.index()].as_ref(),
            _ => None,
        }
    }

    // ───────────────────────────────────────────────────────────────────────
    // List navigation
    // ───────────────────────────────────────────────────────────────────────

    /// Move the cursor up
    pub fn select_previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor down
    pub fn select_next(&mut self) {
        if self.cursor < CONTACT_COUNT - 1 {
            self.cursor += 1;
        }
    }

    // ───────────────────────────────────────────────────────────────────────
    // Presentation helpers
    // ───────────────────────────────────────────────────────────────────────

    /// Number of populated slots (title bar progress)
    pub fn loaded_count(&self) -> usize {
        self.contacts.iter().filter(|slot| slot.is_some()).count()
    }

    /// Cycle to the next theme
    pub fn next_theme(&mut self) {
        self.theme = self.theme.next();
    }

    /// Toggle the logs panel
    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    /// Advance the spinner animation (called on each tick)
    pub fn tick_animation(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    /// Current spinner character
    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame]
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }

    // ───────────────────────────────────────────────────────────────────────
    // Input plumbing
    // ───────────────────────────────────────────────────────────────────────

    /// Handle a key press - returns true if the action should be triggered
    /// Uses the configured behavior for each key (state-change or repeatable)
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PersonRecord;
    use chrono::Utc;

    fn person(first: &str, last: &str) -> Person {
        let record: PersonRecord = serde_json::from_value(serde_json::json!({
            "gender": "female",
            "email": format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            "name": { "title": "Ms", "first": first, "last": last },
            "picture": {
                "large": "https://randomuser.me/api/portraits/women/1.jpg"
            },
            "location": {
                "street": { "number": 1, "name": "Main St" },
                "postcode": 1000,
                "city": "Town",
                "state": "State",
                "country": "Country"
            },
            "cell": "555-0100"
        }))
        .unwrap();
        Person::new(record)
    }

    fn fill_all(app: &mut App) -> Vec<String> {
        let people = [
            person("Ada", "Lovelace"),
            person("Grace", "Hopper"),
            person("Edith", "Clarke"),
            person("Mary", "Shelley"),
        ];
        let names: Vec<String> = people.iter().map(|p| p.formatted_name()).collect();
        for (slot, p) in ContactSlot::ALL.into_iter().zip(people) {
            app.contact_loaded(slot, p);
        }
        names
    }

    #[test]
    fn loading_until_all_four_slots_populate() {
        let mut app = App::new();
        assert!(app.is_loading());

        app.contact_loaded(ContactSlot::First, person("Ada", "Lovelace"));
        app.contact_loaded(ContactSlot::Second, person("Grace", "Hopper"));
        app.contact_loaded(ContactSlot::Third, person("Edith", "Clarke"));
        assert!(app.is_loading(), "three of four slots is still loading");

        app.contact_loaded(ContactSlot::Fourth, person("Mary", "Shelley"));
        assert!(!app.is_loading());
        assert_eq!(app.loaded_count(), 4);
    }

    #[test]
    fn open_details_is_a_no_op_while_loading() {
        let mut app = App::new();
        app.open_details();
        assert!(app.modal.is_none());
        assert!(app.selected_person().is_none());
    }

    #[test]
    fn open_and_close_details_for_each_slot() {
        let mut app = App::new();
        let names = fill_all(&mut app);

        for (i, slot) in ContactSlot::ALL.into_iter().enumerate() {
            app.open_details_for(slot);
            let selected = app.selected_person().expect("modal selects a person");
            assert_eq!(selected.formatted_name(), names[i]);

            app.close_modal();
            assert!(app.modal.is_none());
            assert!(app.selected_person().is_none());
        }

        // List unchanged after all that opening and closing
        let after: Vec<String> = app
            .contacts
            .iter()
            .map(|c| c.as_ref().unwrap().formatted_name())
            .collect();
        assert_eq!(after, names);
    }

    #[test]
    fn cursor_navigation_is_clamped() {
        let mut app = App::new();
        fill_all(&mut app);

        app.select_previous();
        assert_eq!(app.cursor, 0);

        for _ in 0..10 {
            app.select_next();
        }
        assert_eq!(app.cursor, CONTACT_COUNT - 1);
    }

    #[test]
    fn enter_opens_details_for_cursor_row() {
        let mut app = App::new();
        let names = fill_all(&mut app);

        app.select_next(); // row 2
        app.open_details();
        assert_eq!(
            app.selected_person().unwrap().formatted_name(),
            names[1],
            "modal shows the second slot's person"
        );
    }

    #[test]
    fn fetch_failure_leaves_app_loading() {
        let mut app = App::new();
        app.apply_event(AppEvent::ContactLoaded {
            timestamp: Utc::now(),
            slot: ContactSlot::First,
            person: person("Ada", "Lovelace"),
        });
        app.apply_event(AppEvent::FetchFailed {
            timestamp: Utc::now(),
            message: "connection refused".to_string(),
        });

        assert!(app.is_loading(), "failure never flips the view to ready");
        app.open_details();
        assert!(app.modal.is_none());
    }

    #[test]
    fn end_to_end_select_second_contact() {
        // mount -> four loads -> open row 2 -> modal shows B -> close
        let mut app = App::new();
        let names = fill_all(&mut app);
        assert!(!app.is_loading());

        app.open_details_for(ContactSlot::Second);
        let b = app.selected_person().unwrap();
        assert_eq!(b.formatted_name(), names[1]);
        assert_eq!(b.email, "grace.hopper@example.com");

        app.close_modal();
        assert!(app.modal.is_none());
        assert_eq!(app.loaded_count(), 4);
    }
}
