// Data models for the remote person source
//
// These structs map to the randomuser.me API payload. We use Serde's derive
// macros to generate the deserialization code.
//
// Note: We only parse the fields we care about for display.
// Serde will ignore extra fields, making this robust to API changes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level API payload: `{ "results": [ <record>, ... ] }`
///
/// The endpoint returns one record per request; only `results[0]` is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPayload {
    pub results: Vec<PersonRecord>,
}

/// One raw person record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRecord {
    pub gender: String,
    pub email: String,
    pub name: Name,

    // The picture block is occasionally absent; everything downstream
    // must tolerate a record without one.
    #[serde(default)]
    pub picture: Option<Portrait>,

    pub location: Location,
    pub cell: String,
}

/// Structured name: "Ms Ada Lovelace" pieces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Name {
    pub title: String,
    pub first: String,
    pub last: String,
}

/// Portrait image URLs at three sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portrait {
    pub large: String,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Structured postal address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub street: Street,
    pub postcode: Postcode,
    pub city: String,
    pub state: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Street {
    pub number: u32,
    pub name: String,
}

/// Postcode is polymorphic on the wire: integer for some regions (US),
/// string for others (UK, Canada). Accept both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Postcode {
    Number(u64),
    Text(String),
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postcode::Number(n) => write!(f, "{}", n),
            Postcode::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Display wrapper around one raw record.
///
/// All fields are assigned at construction and never mutated; the formatting
/// accessors are pure reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub gender: String,
    pub email: String,
    pub name: Name,
    pub portrait: Option<Portrait>,
    pub location: Location,
    pub cell: String,
}

impl Person {
    pub fn new(record: PersonRecord) -> Self {
        Self {
            gender: record.gender,
            email: record.email,
            name: record.name,
            portrait: record.picture,
            location: record.location,
            cell: record.cell,
        }
    }

    /// "{title} {first} {last}"
    pub fn formatted_name(&self) -> String {
        format!("{} {} {}", self.name.title, self.name.first, self.name.last)
    }

    /// "{number} {street} {postcode}, {city},  {state}, {country}"
    ///
    /// The double space before the state matches the observed output of the
    /// shipped formatter and is kept verbatim.
    pub fn formatted_location(&self) -> String {
        format!(
            "{} {} {}, {},  {}, {}",
            self.location.street.number,
            self.location.street.name,
            self.location.postcode,
            self.location.city,
            self.location.state,
            self.location.country,
        )
    }

    /// Large portrait URL, or "" when the record carried no picture.
    /// The empty string keeps the image field renderable without a panic.
    pub fn portrait_large_url(&self) -> &str {
        self.portrait.as_ref().map(|p| p.large.as_str()).unwrap_or("")
    }
}

impl From<PersonRecord> for Person {
    fn from(record: PersonRecord) -> Self {
        Self::new(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PersonRecord {
        serde_json::from_value(serde_json::json!({
            "gender": "female",
            "email": "brandie.lawson@example.com",
            "name": { "title": "Ms", "first": "Brandie", "last": "Lawson" },
            "picture": {
                "large": "https://randomuser.me/api/portraits/women/24.jpg",
                "medium": "https://randomuser.me/api/portraits/med/women/24.jpg",
                "thumbnail": "https://randomuser.me/api/portraits/thumb/women/24.jpg"
            },
            "location": {
                "street": { "number": 9120, "name": "Saddle Dr" },
                "postcode": 54740,
                "city": "Geraldton",
                "state": "Queensland",
                "country": "Australia"
            },
            "cell": "0401-175-082"
        }))
        .expect("sample record should deserialize")
    }

    #[test]
    fn formatted_name_joins_title_first_last() {
        let person = Person::new(sample_record());
        assert_eq!(person.formatted_name(), "Ms Brandie Lawson");
    }

    #[test]
    fn formatted_location_exact_spacing() {
        let person = Person::new(sample_record());
        // Double space after the city comma is intentional
        assert_eq!(
            person.formatted_location(),
            "9120 Saddle Dr 54740, Geraldton,  Queensland, Australia"
        );
    }

    #[test]
    fn string_postcode_deserializes() {
        let mut value = serde_json::to_value(sample_record()).unwrap();
        value["location"]["postcode"] = serde_json::json!("EC1A 1BB");
        let record: PersonRecord = serde_json::from_value(value).unwrap();
        let person = Person::new(record);
        assert_eq!(
            person.formatted_location(),
            "9120 Saddle Dr EC1A 1BB, Geraldton,  Queensland, Australia"
        );
    }

    #[test]
    fn missing_picture_yields_empty_portrait_url() {
        let mut value = serde_json::to_value(sample_record()).unwrap();
        value.as_object_mut().unwrap().remove("picture");
        let record: PersonRecord = serde_json::from_value(value).unwrap();
        let person = Person::new(record);
        assert_eq!(person.portrait_large_url(), "");
    }

    #[test]
    fn present_picture_yields_large_url() {
        let person = Person::new(sample_record());
        assert_eq!(
            person.portrait_large_url(),
            "https://randomuser.me/api/portraits/women/24.jpg"
        );
    }

    #[test]
    fn payload_parses_results_array() {
        let payload: ApiPayload = serde_json::from_value(serde_json::json!({
            "results": [serde_json::to_value(sample_record()).unwrap()],
            "info": { "seed": "abc", "results": 1, "page": 1, "version": "1.4" }
        }))
        .unwrap();
        assert_eq!(payload.results.len(), 1);
        assert_eq!(payload.results[0].name.first, "Brandie");
    }
}
