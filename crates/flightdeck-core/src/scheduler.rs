//! Scheduling new launches against the planet catalog.
//!
//! The next flight number is always derived from the store: the highest
//! persisted flight number plus one, or [`DEFAULT_FLIGHT_NUMBER`] plus one on
//! an empty store.
//!
//! Reading the maximum and writing the new launch are two separate store
//! calls. Two concurrent `schedule` calls can therefore derive the same
//! flight number, and because [`LaunchStore::save_launch`] is an upsert the
//! later write replaces the earlier one without an error.

use tracing::info;

use crate::{
  Error, Result,
  launch::{Launch, LaunchRequest},
  store::{LaunchStore, PlanetCatalog},
};

/// Baseline used when no launch is stored yet; the first scheduled flight is
/// `DEFAULT_FLIGHT_NUMBER + 1`.
pub const DEFAULT_FLIGHT_NUMBER: u32 = 100;

/// Customers attached to every locally scheduled launch.
pub const DEFAULT_CUSTOMERS: [&str; 2] = ["Zero to Mastery", "NASA"];

/// The flight number the next scheduled launch will receive.
pub async fn next_flight_number<S>(store: &S) -> Result<u32>
where
  S: LaunchStore,
{
  let latest = store
    .latest_flight_number()
    .await
    .map_err(Error::storage)?
    .unwrap_or(DEFAULT_FLIGHT_NUMBER);
  Ok(latest + 1)
}

/// Validate `request` against `catalog`, assign the next flight number and
/// persist the launch. Returns the stored record.
///
/// Fails with [`Error::UnknownTarget`] before any write if the target planet
/// is not in the catalog.
pub async fn schedule<S, C>(
  store: &S,
  catalog: &C,
  request: LaunchRequest,
) -> Result<Launch>
where
  S: LaunchStore,
  C: PlanetCatalog,
{
  let planet = catalog
    .find_planet(&request.target)
    .await
    .map_err(Error::storage)?;
  if planet.is_none() {
    return Err(Error::UnknownTarget(request.target));
  }

  let flight_number = next_flight_number(store).await?;

  let launch = Launch {
    flight_number,
    mission: request.mission,
    rocket: request.rocket,
    launch_date: request.launch_date,
    target: Some(request.target),
    customers: DEFAULT_CUSTOMERS.iter().map(|c| c.to_string()).collect(),
    upcoming: true,
    success: Some(true),
  };

  store
    .save_launch(launch.clone())
    .await
    .map_err(Error::storage)?;

  info!(flight_number, mission = %launch.mission, "scheduled launch");
  Ok(launch)
}
