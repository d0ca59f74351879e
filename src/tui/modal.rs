// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on the returned ModalAction.

use crate::events::ContactSlot;
use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Copy the shown contact (readable format)
    CopyReadable,
    /// Copy the shown contact (raw-record JSON)
    CopyJson,
}

/// Available modal types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Full contact details for one slot
    Details(ContactSlot),
    /// Help overlay - keyboard shortcuts
    Help,
}

impl Modal {
    /// Create a details modal for the given slot
    pub fn details(slot: ContactSlot) -> Self {
        Modal::Details(slot)
    }

    /// Create a help modal
    pub fn help() -> Self {
        Modal::Help
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Details(_) => match key {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => ModalAction::Close,
                KeyCode::Char('y') => ModalAction::CopyReadable,
                KeyCode::Char('Y') => ModalAction::CopyJson,
                _ => ModalAction::None,
            },
        }
    }

    /// Get the slot if this is a Details modal
    pub fn slot(&self) -> Option<ContactSlot> {
        match self {
            Modal::Details(slot) => Some(*slot),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_modal_closes_on_escape_and_enter() {
        let mut modal = Modal::details(ContactSlot::Second);
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('q')), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('x')), ModalAction::None);
    }

    #[test]
    fn details_modal_copy_actions() {
        let mut modal = Modal::details(ContactSlot::First);
        assert_eq!(modal.handle_input(KeyCode::Char('y')), ModalAction::CopyReadable);
        assert_eq!(modal.handle_input(KeyCode::Char('Y')), ModalAction::CopyJson);
    }

    #[test]
    fn help_modal_ignores_copy_keys() {
        let mut modal = Modal::help();
        assert_eq!(modal.handle_input(KeyCode::Char('y')), ModalAction::None);
        assert_eq!(modal.handle_input(KeyCode::Char('?')), ModalAction::Close);
    }

    #[test]
    fn slot_accessor() {
        assert_eq!(Modal::details(ContactSlot::Third).slot(), Some(ContactSlot::Third));
        assert_eq!(Modal::help().slot(), None);
    }
}
