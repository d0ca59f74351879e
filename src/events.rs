// Events that flow from the fetch task to the TUI
//
// These events carry the fetched contacts into the UI task. Using an enum
// allows pattern matching and ensures type-safe communication between async
// tasks.

use crate::model::Person;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of contact slots. The list always shows exactly four entries.
pub const CONTACT_COUNT: usize = 4;

/// Fixed enumeration of the four contact slots.
///
/// Slots are addressed through this enum rather than by string key, so a
/// typo'd slot name is a compile error instead of a silent miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactSlot {
    First,
    Second,
    Third,
    Fourth,
}

impl ContactSlot {
    /// All slots in display order
    pub const ALL: [ContactSlot; CONTACT_COUNT] = [
        ContactSlot::First,
        ContactSlot::Second,
        ContactSlot::Third,
        ContactSlot::Fourth,
    ];

    /// Zero-based position in the contact list
    pub fn index(self) -> usize {
        match self {
            ContactSlot::First => 0,
            ContactSlot::Second => 1,
            ContactSlot::Third => 2,
            ContactSlot::Fourth => 3,
        }
    }

    /// Slot at a zero-based list position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Main event type that flows through the application
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")] // {"type": "contact_loaded", ...}
pub enum AppEvent {
    /// One contact slot was populated by the fetch pipeline
    ContactLoaded {
        timestamp: DateTime<Utc>,
        slot: ContactSlot,
        person: Person,
    },

    /// A fetch failed; the pipeline stops and unfilled slots stay empty
    FetchFailed {
        timestamp: DateTime<Utc>,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_indices_are_display_order() {
        for (i, slot) in ContactSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
            assert_eq!(ContactSlot::from_index(i), Some(*slot));
        }
        assert_eq!(ContactSlot::from_index(CONTACT_COUNT), None);
    }
}
