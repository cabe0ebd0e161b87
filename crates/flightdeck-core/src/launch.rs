//! Launch records — the central entity of the tracker.
//!
//! A launch is keyed by its flight number. Records arrive either from the
//! launch provider (historical launches) or from a scheduling request (future
//! launches against a catalog planet); both shapes share this one type.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Launch ──────────────────────────────────────────────────────────────────

/// A persisted launch record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Launch {
  /// Unique key and natural sort order.
  pub flight_number: u32,
  pub mission:       String,
  pub rocket:        String,
  pub launch_date:   DateTime<Utc>,
  /// Destination planet name; only set for locally scheduled launches.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub target:        Option<String>,
  pub customers:     Vec<String>,
  pub upcoming:      bool,
  /// `None` when the provider has not reported an outcome yet.
  pub success:       Option<bool>,
}

// ─── LaunchRequest ───────────────────────────────────────────────────────────

/// Input to [`crate::scheduler::schedule`].
///
/// Everything else on the final record (flight number, customers, status
/// flags) is assigned by the scheduler, never taken from the caller.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
  pub mission:     String,
  pub rocket:      String,
  pub launch_date: DateTime<Utc>,
  pub target:      String,
}

// ─── LaunchFilter ────────────────────────────────────────────────────────────

/// Parameters for [`crate::store::LaunchStore::find_launch`]. Every populated
/// field must match exactly.
#[derive(Debug, Clone, Default)]
pub struct LaunchFilter {
  pub flight_number: Option<u32>,
  pub rocket:        Option<String>,
  pub mission:       Option<String>,
}

impl LaunchFilter {
  pub fn flight_number(flight_number: u32) -> Self {
    Self { flight_number: Some(flight_number), ..Self::default() }
  }
}

// ─── Dates ───────────────────────────────────────────────────────────────────

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y-%m-%dT%H:%M",
  "%Y-%m-%d %H:%M:%S%.f",
  "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 5] =
  ["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%B %d %Y", "%b %d %Y"];

/// Normalise a caller-supplied launch date to UTC.
///
/// Accepts RFC 3339 timestamps, naive ISO date-times with or without seconds
/// and fractional seconds (read as UTC, `T` or space separated), bare
/// `YYYY-MM-DD` dates and long-form dates such as `"December 27, 2030"` or
/// `"Dec 27 2030"`. Dates without a time component land on midnight UTC.
pub fn parse_launch_date(input: &str) -> Option<DateTime<Utc>> {
  let input = input.trim();

  if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
    return Some(dt.with_timezone(&Utc));
  }

  if let Some(naive) = NAIVE_DATETIME_FORMATS
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
  {
    return Some(naive.and_utc());
  }

  DATE_FORMATS
    .iter()
    .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
    .and_then(|date| date.and_hms_opt(0, 0, 0))
    .map(|naive| naive.and_utc())
}

/// Interpret `millis` as milliseconds since the Unix epoch.
pub fn launch_date_from_millis(millis: i64) -> Option<DateTime<Utc>> {
  DateTime::from_timestamp_millis(millis)
}
