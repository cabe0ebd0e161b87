//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings; customer lists as compact JSON.

use chrono::{DateTime, Utc};
use flightdeck_core::launch::Launch;

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Customers ───────────────────────────────────────────────────────────────

pub fn encode_customers(customers: &[String]) -> Result<String> {
  Ok(serde_json::to_string(customers)?)
}

pub fn decode_customers(s: &str) -> Result<Vec<String>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list matching [`RawLaunch::from_row`].
pub const LAUNCH_COLUMNS: &str =
  "flight_number, mission, rocket, launch_date, target, customers, upcoming, success";

/// Raw values read directly from a `launches` row.
pub struct RawLaunch {
  pub flight_number: u32,
  pub mission:       String,
  pub rocket:        String,
  pub launch_date:   String,
  pub target:        Option<String>,
  pub customers:     String,
  pub upcoming:      bool,
  pub success:       Option<bool>,
}

impl RawLaunch {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      flight_number: row.get(0)?,
      mission:       row.get(1)?,
      rocket:        row.get(2)?,
      launch_date:   row.get(3)?,
      target:        row.get(4)?,
      customers:     row.get(5)?,
      upcoming:      row.get(6)?,
      success:       row.get(7)?,
    })
  }

  pub fn into_launch(self) -> Result<Launch> {
    Ok(Launch {
      flight_number: self.flight_number,
      mission:       self.mission,
      rocket:        self.rocket,
      launch_date:   decode_dt(&self.launch_date)?,
      target:        self.target,
      customers:     decode_customers(&self.customers)?,
      upcoming:      self.upcoming,
      success:       self.success,
    })
  }
}
