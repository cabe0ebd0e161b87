//! Storage and provider abstractions.
//!
//! [`LaunchStore`] and [`PlanetCatalog`] are implemented by storage backends
//! (e.g. `flightdeck-store-sqlite`); [`LaunchProvider`] is implemented by
//! upstream launch sources (e.g. `flightdeck-spacex`). The scheduler, the
//! synchroniser and the HTTP layer depend on these traits only.

use std::future::Future;

use crate::{
  launch::{Launch, LaunchFilter},
  planet::Planet,
};

// ─── LaunchStore ─────────────────────────────────────────────────────────────

/// Abstraction over a launch store backend.
///
/// [`save_launch`](LaunchStore::save_launch) is the only full-record write
/// path. The store is the single source of truth for flight numbers; nothing
/// above it keeps a counter.
pub trait LaunchStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Insert `launch`, or replace every field of the stored launch with the
  /// same flight number. Never produces two records for one flight number.
  fn save_launch(
    &self,
    launch: Launch,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Mark a launch as neither upcoming nor successful.
  ///
  /// Returns `true` only if exactly one record changed. `false` means "not
  /// aborted": either nothing matched or the launch was already aborted.
  fn abort_launch(
    &self,
    flight_number: u32,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Return the first launch (lowest flight number) matching `filter`.
  fn find_launch<'a>(
    &'a self,
    filter: &'a LaunchFilter,
  ) -> impl Future<Output = Result<Option<Launch>, Self::Error>> + Send + 'a;

  /// Whether a launch with `flight_number` is stored.
  fn launch_exists(
    &self,
    flight_number: u32,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// The highest stored flight number, or `None` for an empty store.
  fn latest_flight_number(
    &self,
  ) -> impl Future<Output = Result<Option<u32>, Self::Error>> + Send + '_;

  /// Launches in ascending flight-number order, skipping the first `skip`
  /// and returning at most `limit`. A `limit` of zero means unbounded.
  fn list_launches(
    &self,
    skip: usize,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<Launch>, Self::Error>> + Send + '_;
}

// ─── PlanetCatalog ───────────────────────────────────────────────────────────

/// Read-only lookup over the habitable-planet catalog.
pub trait PlanetCatalog: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Exact-name lookup.
  fn find_planet<'a>(
    &'a self,
    kepler_name: &'a str,
  ) -> impl Future<Output = Result<Option<Planet>, Self::Error>> + Send + 'a;

  fn list_planets(
    &self,
  ) -> impl Future<Output = Result<Vec<Planet>, Self::Error>> + Send + '_;
}

// ─── LaunchProvider ──────────────────────────────────────────────────────────

/// An upstream source of historical launches.
///
/// Implementations fetch the full, unpaginated history in one request and map
/// every document into a [`Launch`] in the provider's order.
pub trait LaunchProvider: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn fetch_launches(
    &self,
  ) -> impl Future<Output = Result<Vec<Launch>, Self::Error>> + Send + '_;
}
