//! [`SqliteStore`] — the SQLite implementation of [`LaunchStore`] and
//! [`PlanetCatalog`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use tracing::debug;

use flightdeck_core::{
  launch::{Launch, LaunchFilter},
  planet::Planet,
  store::{LaunchStore, PlanetCatalog},
};

use crate::{
  Result,
  encode::{LAUNCH_COLUMNS, RawLaunch, encode_customers, encode_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A launch store and planet catalog backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Add planets to the catalog. Names already present are left alone.
  /// Returns the number of planets newly inserted.
  pub async fn add_planets<I, T>(&self, names: I) -> Result<usize>
  where
    I: IntoIterator<Item = T>,
    T: Into<String>,
  {
    let names: Vec<String> = names.into_iter().map(Into::into).collect();

    let inserted = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut inserted = 0;
        {
          let mut stmt =
            tx.prepare("INSERT OR IGNORE INTO planets (kepler_name) VALUES (?1)")?;
          for name in &names {
            inserted += stmt.execute(rusqlite::params![name])?;
          }
        }
        tx.commit()?;
        Ok(inserted)
      })
      .await?;

    debug!(inserted, "seeded planet catalog");
    Ok(inserted)
  }
}

// ─── LaunchStore impl ────────────────────────────────────────────────────────

impl LaunchStore for SqliteStore {
  type Error = crate::Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn save_launch(&self, launch: Launch) -> Result<()> {
    let launch_date = encode_dt(launch.launch_date);
    let customers   = encode_customers(&launch.customers)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO launches (
             flight_number, mission, rocket, launch_date,
             target, customers, upcoming, success
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
           ON CONFLICT (flight_number) DO UPDATE SET
             mission     = excluded.mission,
             rocket      = excluded.rocket,
             launch_date = excluded.launch_date,
             target      = excluded.target,
             customers   = excluded.customers,
             upcoming    = excluded.upcoming,
             success     = excluded.success",
          rusqlite::params![
            launch.flight_number,
            launch.mission,
            launch.rocket,
            launch_date,
            launch.target,
            customers,
            launch.upcoming,
            launch.success,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn abort_launch(&self, flight_number: u32) -> Result<bool> {
    // Rows already aborted are excluded so they do not count as modified.
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE launches SET upcoming = 0, success = 0
           WHERE flight_number = ?1
             AND (upcoming != 0 OR success IS NOT 0)",
          rusqlite::params![flight_number],
        )?)
      })
      .await?;
    Ok(changed == 1)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn find_launch(&self, filter: &LaunchFilter) -> Result<Option<Launch>> {
    let flight_number = filter.flight_number;
    let rocket        = filter.rocket.clone();
    let mission       = filter.mission.clone();

    let raw: Option<RawLaunch> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {LAUNCH_COLUMNS} FROM launches
                 WHERE (?1 IS NULL OR flight_number = ?1)
                   AND (?2 IS NULL OR rocket = ?2)
                   AND (?3 IS NULL OR mission = ?3)
                 ORDER BY flight_number ASC
                 LIMIT 1"
              ),
              rusqlite::params![flight_number, rocket, mission],
              RawLaunch::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawLaunch::into_launch).transpose()
  }

  async fn launch_exists(&self, flight_number: u32) -> Result<bool> {
    let exists = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT 1 FROM launches WHERE flight_number = ?1",
              rusqlite::params![flight_number],
              |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false),
        )
      })
      .await?;
    Ok(exists)
  }

  async fn latest_flight_number(&self) -> Result<Option<u32>> {
    let latest: Option<u32> = self
      .conn
      .call(|conn| {
        Ok(
          conn
            .query_row(
              "SELECT flight_number FROM launches ORDER BY flight_number DESC LIMIT 1",
              [],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;
    Ok(latest)
  }

  async fn list_launches(&self, skip: usize, limit: usize) -> Result<Vec<Launch>> {
    // SQLite treats a negative LIMIT as "no limit"; offsets past i64::MAX
    // clamp, which still lands beyond any stored row.
    let limit_val = match limit {
      0 => -1,
      n => i64::try_from(n).unwrap_or(-1),
    };
    let offset_val = i64::try_from(skip).unwrap_or(i64::MAX);

    let raws: Vec<RawLaunch> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {LAUNCH_COLUMNS} FROM launches
           ORDER BY flight_number ASC
           LIMIT ?1 OFFSET ?2"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![limit_val, offset_val], RawLaunch::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawLaunch::into_launch).collect()
  }
}

// ─── PlanetCatalog impl ──────────────────────────────────────────────────────

impl PlanetCatalog for SqliteStore {
  type Error = crate::Error;

  async fn find_planet(&self, kepler_name: &str) -> Result<Option<Planet>> {
    let name = kepler_name.to_owned();

    let found: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT kepler_name FROM planets WHERE kepler_name = ?1",
              rusqlite::params![name],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    Ok(found.map(Planet::new))
  }

  async fn list_planets(&self) -> Result<Vec<Planet>> {
    let names: Vec<String> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT kepler_name FROM planets ORDER BY kepler_name")?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(names.into_iter().map(Planet::new).collect())
  }
}
