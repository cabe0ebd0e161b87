//! JSON REST API for Flightdeck.
//!
//! Exposes an axum [`Router`] backed by any store implementing both
//! [`LaunchStore`] and [`PlanetCatalog`]. TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/v1", flightdeck_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod launches;
pub mod planets;

use std::sync::Arc;

use axum::{Router, routing::{delete, get}};
use flightdeck_core::store::{LaunchStore, PlanetCatalog};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: LaunchStore + PlanetCatalog + 'static,
{
  Router::new()
    // Launches
    .route("/launches", get(launches::list::<S>).post(launches::create::<S>))
    .route("/launches/{id}", delete(launches::abort::<S>))
    // Planets
    .route("/planets", get(planets::list::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
