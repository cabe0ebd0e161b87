//! HTTP server wiring for Flightdeck.
//!
//! Holds the runtime configuration, the startup sequence (seed the planet
//! catalog, synchronise launch history) and the top-level router.

use std::{path::PathBuf, sync::Arc, time::Duration};

use axum::Router;
use flightdeck_core::{
  store::{LaunchProvider, LaunchStore, PlanetCatalog},
  sync::{self, SyncOutcome},
};
use flightdeck_spacex::DEFAULT_URL;
use flightdeck_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `FLIGHTDECK_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:                  String,
  #[serde(default = "default_port")]
  pub port:                  u16,
  #[serde(default = "default_store_path")]
  pub store_path:            PathBuf,
  #[serde(default = "default_provider_url")]
  pub provider_url:          String,
  #[serde(default = "default_provider_timeout_secs")]
  pub provider_timeout_secs: u64,
  /// Habitable-planet names seeded into the catalog at startup.
  #[serde(default)]
  pub planets:               Vec<String>,
  /// Start serving without contacting the launch provider.
  #[serde(default)]
  pub skip_sync:             bool,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8000 }
fn default_store_path() -> PathBuf { PathBuf::from("flightdeck.db") }
fn default_provider_url() -> String { DEFAULT_URL.to_string() }
fn default_provider_timeout_secs() -> u64 { 60 }

impl ServerConfig {
  pub fn provider_timeout(&self) -> Duration {
    Duration::from_secs(self.provider_timeout_secs)
  }
}

// ─── Startup ──────────────────────────────────────────────────────────────────

/// Seed the planet catalog and, unless disabled, synchronise launch history.
///
/// Returns `None` when synchronisation was skipped by configuration.
pub async fn prepare<P>(
  store: &SqliteStore,
  provider: &P,
  config: &ServerConfig,
) -> anyhow::Result<Option<SyncOutcome>>
where
  P: LaunchProvider,
{
  let seeded = store.add_planets(config.planets.iter().cloned()).await?;
  info!(seeded, configured = config.planets.len(), "planet catalog ready");

  if config.skip_sync {
    info!("launch sync disabled by configuration");
    return Ok(None);
  }

  let outcome = sync::bootstrap(store, provider).await?;
  Ok(Some(outcome))
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the top-level router: the JSON API under `/v1`, with request
/// tracing.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: LaunchStore + PlanetCatalog + 'static,
{
  Router::new()
    .nest("/v1", flightdeck_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}
