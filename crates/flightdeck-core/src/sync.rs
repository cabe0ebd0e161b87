//! One-time synchronisation of the provider's launch history.
//!
//! [`bootstrap`] probes for a known reference launch and only calls
//! [`populate`] when it is missing. The probe is a heuristic, not a count:
//!
//! - an empty store, or one whose flight 1 is missing or altered, always
//!   triggers a (re-)population;
//! - a store holding every flight except flight 1 re-triggers it on every
//!   start.
//!
//! [`populate`] commits each launch through [`LaunchStore::save_launch`]
//! before moving on to the next, so a failure part-way through leaves the
//! already-written prefix in place. It must not run concurrently with itself
//! or with scheduling.

use tracing::{debug, info, warn};

use crate::{
  Error, Result,
  launch::LaunchFilter,
  store::{LaunchProvider, LaunchStore},
};

/// Flight number of the launch whose presence marks the store as populated.
pub const REFERENCE_FLIGHT_NUMBER: u32 = 1;
pub const REFERENCE_ROCKET: &str = "Falcon 1";
pub const REFERENCE_MISSION: &str = "FalconSat";

/// What [`bootstrap`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
  /// The reference launch was present; the provider was not contacted.
  AlreadyPopulated,
  /// The provider's history was downloaded and this many launches upserted.
  Populated { launches: usize },
}

fn reference_filter() -> LaunchFilter {
  LaunchFilter {
    flight_number: Some(REFERENCE_FLIGHT_NUMBER),
    rocket:        Some(REFERENCE_ROCKET.to_owned()),
    mission:       Some(REFERENCE_MISSION.to_owned()),
  }
}

/// Populate `store` from `provider` unless the reference launch is present.
pub async fn bootstrap<S, P>(store: &S, provider: &P) -> Result<SyncOutcome>
where
  S: LaunchStore,
  P: LaunchProvider,
{
  let reference = store
    .find_launch(&reference_filter())
    .await
    .map_err(Error::storage)?;

  if reference.is_some() {
    info!("launch data already present; skipping sync");
    return Ok(SyncOutcome::AlreadyPopulated);
  }

  let launches = populate(store, provider).await?;
  Ok(SyncOutcome::Populated { launches })
}

/// Download the full launch history and upsert every launch in provider
/// order. Returns the number of launches written.
pub async fn populate<S, P>(store: &S, provider: &P) -> Result<usize>
where
  S: LaunchStore,
  P: LaunchProvider,
{
  info!("downloading launch data");

  let launches = provider.fetch_launches().await.map_err(|e| {
    warn!(error = %e, "problem downloading launch data");
    Error::sync(e)
  })?;

  let total = launches.len();
  for launch in launches {
    debug!(flight_number = launch.flight_number, mission = %launch.mission, "upserting launch");
    store.save_launch(launch).await.map_err(Error::storage)?;
  }

  info!(launches = total, "launch data synchronised");
  Ok(total)
}
