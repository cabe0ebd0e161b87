//! Handler for `GET /planets`.

use std::sync::Arc;

use axum::{Json, extract::State};
use flightdeck_core::{planet::Planet, store::PlanetCatalog};

use crate::error::ApiError;

/// `GET /planets`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Planet>>, ApiError>
where
  S: PlanetCatalog,
{
  let planets = store.list_planets().await.map_err(ApiError::store)?;
  Ok(Json(planets))
}
