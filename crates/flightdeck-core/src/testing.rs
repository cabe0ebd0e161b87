//! In-memory doubles for the store and provider traits.

use std::{
  collections::BTreeMap,
  sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
  },
};

use chrono::{TimeZone, Utc};
use thiserror::Error;

use crate::{
  launch::{Launch, LaunchFilter},
  planet::Planet,
  store::{LaunchProvider, LaunchStore, PlanetCatalog},
};

#[derive(Debug, Error)]
#[error("store offline")]
pub struct Offline;

#[derive(Debug, Error)]
#[error("provider answered with status {0}")]
pub struct BadStatus(pub u16);

pub fn launch(flight_number: u32, mission: &str, rocket: &str) -> Launch {
  Launch {
    flight_number,
    mission: mission.into(),
    rocket: rocket.into(),
    launch_date: Utc.with_ymd_and_hms(2006, 3, 24, 22, 30, 0).unwrap(),
    target: None,
    customers: vec!["NASA".into()],
    upcoming: false,
    success: Some(true),
  }
}

/// Neither upcoming nor successful.
pub fn is_aborted(launch: &Launch) -> bool {
  !launch.upcoming && launch.success == Some(false)
}

/// Every populated field of `filter` equals the launch's.
pub fn filter_matches(filter: &LaunchFilter, launch: &Launch) -> bool {
  filter.flight_number.is_none_or(|n| n == launch.flight_number)
    && filter.rocket.as_deref().is_none_or(|r| r == launch.rocket)
    && filter.mission.as_deref().is_none_or(|m| m == launch.mission)
}

// ─── MemoryStore ─────────────────────────────────────────────────────────────

/// A `BTreeMap`-backed store that can be told to fail after a number of
/// successful writes.
#[derive(Default)]
pub struct MemoryStore {
  launches:   Mutex<BTreeMap<u32, Launch>>,
  planets:    Vec<Planet>,
  writes:     AtomicUsize,
  fail_after: Option<usize>,
}

impl MemoryStore {
  pub fn with_planets(names: &[&str]) -> Self {
    Self {
      planets: names.iter().copied().map(Planet::new).collect(),
      ..Self::default()
    }
  }

  pub fn failing_after(writes: usize) -> Self {
    Self { fail_after: Some(writes), ..Self::default() }
  }

  pub fn insert(&self, launch: Launch) {
    self.launches.lock().unwrap().insert(launch.flight_number, launch);
  }

  pub fn all(&self) -> Vec<Launch> {
    self.launches.lock().unwrap().values().cloned().collect()
  }

  pub fn writes(&self) -> usize { self.writes.load(Ordering::SeqCst) }
}

impl LaunchStore for MemoryStore {
  type Error = Offline;

  async fn save_launch(&self, launch: Launch) -> Result<(), Offline> {
    if self.fail_after.is_some_and(|n| self.writes() >= n) {
      return Err(Offline);
    }
    self.writes.fetch_add(1, Ordering::SeqCst);
    self.insert(launch);
    Ok(())
  }

  async fn abort_launch(&self, flight_number: u32) -> Result<bool, Offline> {
    let mut launches = self.launches.lock().unwrap();
    match launches.get_mut(&flight_number) {
      Some(launch) if !is_aborted(launch) => {
        launch.upcoming = false;
        launch.success = Some(false);
        Ok(true)
      }
      _ => Ok(false),
    }
  }

  async fn find_launch(&self, filter: &LaunchFilter) -> Result<Option<Launch>, Offline> {
    Ok(
      self
        .launches
        .lock()
        .unwrap()
        .values()
        .find(|l| filter_matches(filter, l))
        .cloned(),
    )
  }

  async fn launch_exists(&self, flight_number: u32) -> Result<bool, Offline> {
    Ok(self.launches.lock().unwrap().contains_key(&flight_number))
  }

  async fn latest_flight_number(&self) -> Result<Option<u32>, Offline> {
    Ok(self.launches.lock().unwrap().keys().next_back().copied())
  }

  async fn list_launches(&self, skip: usize, limit: usize) -> Result<Vec<Launch>, Offline> {
    let limit = if limit == 0 { usize::MAX } else { limit };
    Ok(
      self
        .launches
        .lock()
        .unwrap()
        .values()
        .skip(skip)
        .take(limit)
        .cloned()
        .collect(),
    )
  }
}

impl PlanetCatalog for MemoryStore {
  type Error = Offline;

  async fn find_planet(&self, kepler_name: &str) -> Result<Option<Planet>, Offline> {
    Ok(self.planets.iter().find(|p| p.kepler_name == kepler_name).cloned())
  }

  async fn list_planets(&self) -> Result<Vec<Planet>, Offline> {
    Ok(self.planets.clone())
  }
}

// ─── ScriptedProvider ────────────────────────────────────────────────────────

/// A provider that replays a fixed answer and counts fetches.
pub struct ScriptedProvider {
  answer:  Result<Vec<Launch>, u16>,
  fetches: AtomicUsize,
}

impl ScriptedProvider {
  pub fn returning(launches: Vec<Launch>) -> Self {
    Self { answer: Ok(launches), fetches: AtomicUsize::new(0) }
  }

  pub fn failing_with(status: u16) -> Self {
    Self { answer: Err(status), fetches: AtomicUsize::new(0) }
  }

  pub fn fetches(&self) -> usize { self.fetches.load(Ordering::SeqCst) }
}

impl LaunchProvider for ScriptedProvider {
  type Error = BadStatus;

  async fn fetch_launches(&self) -> Result<Vec<Launch>, BadStatus> {
    self.fetches.fetch_add(1, Ordering::SeqCst);
    self.answer.clone().map_err(BadStatus)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn filter_matches_every_populated_field() {
    let falconsat = launch(1, "FalconSat", "Falcon 1");

    assert!(filter_matches(&LaunchFilter::default(), &falconsat));
    assert!(filter_matches(&LaunchFilter::flight_number(1), &falconsat));
    assert!(!filter_matches(&LaunchFilter::flight_number(2), &falconsat));

    let exact = LaunchFilter {
      flight_number: Some(1),
      rocket:        Some("Falcon 1".into()),
      mission:       Some("FalconSat".into()),
    };
    assert!(filter_matches(&exact, &falconsat));

    let wrong_mission = LaunchFilter { mission: Some("DemoSat".into()), ..exact };
    assert!(!filter_matches(&wrong_mission, &falconsat));
  }

  #[tokio::test]
  async fn abort_only_applies_once() {
    let store = MemoryStore::default();
    store.insert(launch(7, "Demo", "Falcon 9"));

    assert!(store.abort_launch(7).await.unwrap());
    assert!(is_aborted(&store.all()[0]));
    assert!(!store.abort_launch(7).await.unwrap());
    assert!(!store.abort_launch(8).await.unwrap());
  }
}
