// Fetch pipeline - pulls person records from the remote source
//
// One GET per contact. The four requests are issued sequentially: each
// response is awaited and its slot populated before the next request goes
// out. A failure anywhere stops the pipeline; the remaining slots are never
// filled and the UI stays on the loading indicator.

use crate::events::{AppEvent, ContactSlot};
use crate::model::{ApiPayload, Person, PersonRecord};
use anyhow::{Context, Result};
use chrono::Utc;
use std::time::Duration;
use tokio::sync::mpsc;

/// HTTP client for the remote person source
pub struct PersonSource {
    client: reqwest::Client,
    api_url: String,
}

impl PersonSource {
    /// Build a source against the given endpoint.
    ///
    /// The timeout bounds each individual request; a hung connection would
    /// otherwise never resolve the slot it was fetched for.
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    /// Fetch one person record: GET the endpoint, take `results[0]`.
    pub async fn query_data(&self) -> Result<PersonRecord> {
        let payload: ApiPayload = self
            .client
            .get(&self.api_url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", self.api_url))?
            .error_for_status()
            .context("Person source returned an error status")?
            .json()
            .await
            .context("Failed to parse person payload")?;

        payload
            .results
            .into_iter()
            .next()
            .context("Person payload contained no results")
    }
}

/// Populate the four contact slots, one sequential request each.
///
/// Sends `ContactLoaded` per filled slot. On the first error it logs, sends
/// `FetchFailed`, and returns - no retry, no partial refill. The receiver
/// renders the loading state until all four slots have arrived, so a halted
/// pipeline leaves the UI loading indefinitely.
pub async fn fetch_contacts(source: PersonSource, tx: mpsc::Sender<AppEvent>) {
    for slot in ContactSlot::ALL {
        match source.query_data().await {
            Ok(record) => {
                let person = Person::new(record);
                tracing::debug!(slot = slot.index(), name = %person.formatted_name(), "Contact loaded");

                let event = AppEvent::ContactLoaded {
                    timestamp: Utc::now(),
                    slot,
                    person,
                };
                if tx.send(event).await.is_err() {
                    // UI is gone; nothing left to populate
                    return;
                }
            }
            Err(e) => {
                tracing::error!(slot = slot.index(), "Contact fetch failed: {:#}", e);
                let _ = tx
                    .send(AppEvent::FetchFailed {
                        timestamp: Utc::now(),
                        message: format!("{:#}", e),
                    })
                    .await;
                return;
            }
        }
    }

    tracing::info!("All contacts loaded");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_builds_with_timeout() {
        let source = PersonSource::new("https://randomuser.me/api/", Duration::from_secs(10));
        assert!(source.is_ok());
    }

    #[test]
    fn empty_results_is_an_error() {
        // query_data maps an empty results array to an error rather than a
        // panic; exercise the same extraction here
        let payload: ApiPayload = serde_json::from_str(r#"{ "results": [] }"#).unwrap();
        assert!(payload.results.into_iter().next().is_none());
    }
}
