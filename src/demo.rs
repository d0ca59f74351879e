// Demo mode: populate the contact list without network access
//
// Emits four canned person records through the same channel the real fetch
// pipeline uses, with staggered delays so the loading spinner is visible.
//
// Run with: ROLODEX_DEMO=1 cargo run --release

use crate::events::{AppEvent, ContactSlot};
use crate::model::{Person, PersonRecord};
use chrono::Utc;
use serde_json::json;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

/// Delay before the first record, so the TUI gets a frame of loading state
const INITIAL_DELAY: Duration = Duration::from_millis(900);

/// Delay between records
const PER_CONTACT_DELAY: Duration = Duration::from_millis(600);

/// Feed the four demo contacts into the channel
pub async fn run_demo(tx: mpsc::Sender<AppEvent>) {
    sleep(INITIAL_DELAY).await;

    for (slot, record) in ContactSlot::ALL.into_iter().zip(demo_records()) {
        let event = AppEvent::ContactLoaded {
            timestamp: Utc::now(),
            slot,
            person: Person::new(record),
        };
        if tx.send(event).await.is_err() {
            return;
        }
        sleep(PER_CONTACT_DELAY).await;
    }

    tracing::info!("Demo contacts loaded");
}

/// Four records in the remote source's wire shape.
///
/// The third record deliberately has no picture block, exercising the
/// empty-portrait path in the details modal.
fn demo_records() -> Vec<PersonRecord> {
    let records = json!([
        {
            "gender": "female",
            "email": "ingrid.solheim@example.com",
            "name": { "title": "Ms", "first": "Ingrid", "last": "Solheim" },
            "picture": {
                "large": "https://randomuser.me/api/portraits/women/61.jpg",
                "medium": "https://randomuser.me/api/portraits/med/women/61.jpg",
                "thumbnail": "https://randomuser.me/api/portraits/thumb/women/61.jpg"
            },
            "location": {
                "street": { "number": 2440, "name": "Fagerborggata" },
                "postcode": "0360",
                "city": "Oslo",
                "state": "Oslo",
                "country": "Norway"
            },
            "cell": "973-41-862"
        },
        {
            "gender": "male",
            "email": "theo.roussel@example.com",
            "name": { "title": "Mr", "first": "Théo", "last": "Roussel" },
            "picture": {
                "large": "https://randomuser.me/api/portraits/men/12.jpg",
                "medium": "https://randomuser.me/api/portraits/med/men/12.jpg",
                "thumbnail": "https://randomuser.me/api/portraits/thumb/men/12.jpg"
            },
            "location": {
                "street": { "number": 88, "name": "Rue de la Mairie" },
                "postcode": 69002,
                "city": "Lyon",
                "state": "Auvergne-Rhône-Alpes",
                "country": "France"
            },
            "cell": "06-48-25-77-19"
        },
        {
            "gender": "female",
            "email": "amelia.clarke@example.com",
            "name": { "title": "Mrs", "first": "Amelia", "last": "Clarke" },
            "location": {
                "street": { "number": 7391, "name": "Victoria Road" },
                "postcode": "SW1A 2AA",
                "city": "London",
                "state": "Greater London",
                "country": "United Kingdom"
            },
            "cell": "07700-900-418"
        },
        {
            "gender": "male",
            "email": "diego.fuentes@example.com",
            "name": { "title": "Mr", "first": "Diego", "last": "Fuentes" },
            "picture": {
                "large": "https://randomuser.me/api/portraits/men/47.jpg",
                "medium": "https://randomuser.me/api/portraits/med/men/47.jpg",
                "thumbnail": "https://randomuser.me/api/portraits/thumb/men/47.jpg"
            },
            "location": {
                "street": { "number": 1523, "name": "Avenida Reforma" },
                "postcode": "06600",
                "city": "Ciudad de México",
                "state": "CDMX",
                "country": "Mexico"
            },
            "cell": "55-3174-2290"
        }
    ]);

    serde_json::from_value(records).expect("demo records are valid wire records")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_records_cover_all_slots() {
        assert_eq!(demo_records().len(), ContactSlot::ALL.len());
    }

    #[test]
    fn third_demo_record_has_no_portrait() {
        let records = demo_records();
        let person = Person::new(records[2].clone());
        assert_eq!(person.portrait_large_url(), "");
        // The others do have one
        assert!(!Person::new(records[0].clone()).portrait_large_url().is_empty());
    }
}
