//! Provider document types and the mapping into local launch records.
//!
//! | local field    | provider field                          |
//! |----------------|-----------------------------------------|
//! | `flightNumber` | `flight_number`                         |
//! | `mission`      | `name`                                  |
//! | `rocket`       | `rocket.name` (populated)               |
//! | `launchDate`   | `date_local`, normalised to UTC         |
//! | `upcoming`     | `upcoming`                              |
//! | `success`      | `success` (`null` for future launches)  |
//! | `customers`    | every `payloads[i].customers`, in order |
//! | `target`       | none                                    |
//!
//! The response envelope must decode or the fetch fails. Individual documents
//! are decoded one at a time by [`decode_docs`]: a document missing a field or
//! carrying the wrong type is logged and skipped, and the rest of the history
//! is still returned. A skipped launch is not stored, so it will stay absent
//! until the next full synchronisation.

use chrono::{DateTime, FixedOffset, Utc};
use flightdeck_core::launch::Launch;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::warn;

/// Body of the history query: every launch, unpaginated, with the rocket name
/// and payload customers populated.
pub fn query_body() -> Value {
  json!({
    "query": {},
    "options": {
      "pagination": false,
      "populate": [
        { "path": "rocket",   "select": { "name": 1 } },
        { "path": "payloads", "select": { "customers": 1 } },
      ],
    },
  })
}

/// The query envelope. Documents stay raw until [`decode_docs`].
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
  pub docs: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalLaunch {
  pub flight_number: u32,
  pub name:          String,
  pub rocket:        ExternalRocket,
  pub date_local:    DateTime<FixedOffset>,
  pub upcoming:      bool,
  pub success:       Option<bool>,
  #[serde(default)]
  pub payloads:      Vec<ExternalPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalRocket {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalPayload {
  #[serde(default)]
  pub customers: Vec<String>,
}

/// Decode each raw document, dropping the ones that do not fit
/// [`ExternalLaunch`].
pub fn decode_docs(docs: Vec<Value>) -> Vec<ExternalLaunch> {
  let total = docs.len();
  let decoded: Vec<ExternalLaunch> = docs
    .into_iter()
    .enumerate()
    .filter_map(|(index, doc)| {
      let flight_number = doc.get("flight_number").and_then(Value::as_u64);
      serde_json::from_value(doc)
        .inspect_err(|e| {
          warn!(
            index,
            ?flight_number,
            error = %e,
            "skipping malformed launch document"
          );
        })
        .ok()
    })
    .collect();

  let skipped = total - decoded.len();
  if skipped > 0 {
    warn!(skipped, total, "some launch documents could not be decoded");
  }
  decoded
}

/// Map one provider document into a local launch record.
pub fn map_launch(doc: ExternalLaunch) -> Launch {
  let customers = doc
    .payloads
    .into_iter()
    .flat_map(|payload| payload.customers)
    .collect();

  Launch {
    flight_number: doc.flight_number,
    mission: doc.name,
    rocket: doc.rocket.name,
    launch_date: doc.date_local.with_timezone(&Utc),
    target: None,
    customers,
    upcoming: doc.upcoming,
    success: doc.success,
  }
}
