//! Handlers for `/launches` endpoints.
//!
//! | Method   | Path             | Notes |
//! |----------|------------------|-------|
//! | `GET`    | `/launches`      | Optional `?page=<n>&limit=<n>`; `limit` 0 or absent returns everything |
//! | `POST`   | `/launches`      | Body: [`CreateBody`]; returns 201 + stored launch |
//! | `DELETE` | `/launches/:id`  | Aborts the launch; 404 if unknown or not a flight number, 400 if not aborted |
//!
//! Extractor failures (malformed JSON, bad query strings) are reported through
//! [`ApiError`] so every error body has the same `{"error": ...}` shape.

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    FromRequestParts, Path, Query, State,
    rejection::{JsonRejection, QueryRejection},
  },
  http::{StatusCode, request::Parts},
  response::IntoResponse,
};
use flightdeck_core::{
  launch::{Launch, LaunchRequest, launch_date_from_millis, parse_launch_date},
  scheduler,
  store::{LaunchStore, PlanetCatalog},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  pub page:  Option<usize>,
  pub limit: Option<usize>,
}

impl ListParams {
  /// Convert page-based parameters into `(skip, limit)`. Pages start at 1;
  /// page 0 is treated as page 1.
  pub fn skip_limit(&self) -> (usize, usize) {
    let page = self.page.filter(|p| *p > 0).unwrap_or(1);
    let limit = self.limit.unwrap_or(0);
    ((page - 1).saturating_mul(limit), limit)
  }
}

/// `GET /launches[?page=<n>&limit=<n>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Launch>>, ApiError>
where
  S: LaunchStore,
{
  let Query(params) = params?;
  let (skip, limit) = params.skip_limit();
  let launches = store
    .list_launches(skip, limit)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(launches))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// Body of `POST /launches`. Every field is required; they are optional here
/// so a missing one yields a 400 with a useful message instead of a 422.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBody {
  pub mission:     Option<String>,
  pub rocket:      Option<String>,
  pub launch_date: Option<LaunchDateInput>,
  pub target:      Option<String>,
}

/// A launch date as sent by clients: a date string, or milliseconds since the
/// Unix epoch.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LaunchDateInput {
  Millis(i64),
  Text(String),
}

impl LaunchDateInput {
  fn is_blank(&self) -> bool {
    matches!(self, Self::Text(s) if s.trim().is_empty())
  }
}

impl CreateBody {
  fn into_request(self) -> Result<LaunchRequest, ApiError> {
    let required = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

    let (Some(mission), Some(rocket), Some(launch_date), Some(target)) = (
      required(self.mission),
      required(self.rocket),
      self.launch_date.filter(|d| !d.is_blank()),
      required(self.target),
    ) else {
      return Err(ApiError::BadRequest(
        "Missing required launch property".to_string(),
      ));
    };

    let launch_date = match launch_date {
      LaunchDateInput::Millis(ms) => launch_date_from_millis(ms),
      LaunchDateInput::Text(text) => parse_launch_date(&text),
    }
    .ok_or_else(|| ApiError::BadRequest("Invalid launch date".to_string()))?;

    Ok(LaunchRequest { mission, rocket, launch_date, target })
  }
}

/// `POST /launches`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<CreateBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: LaunchStore + PlanetCatalog,
{
  let Json(body) = body?;
  let request = body.into_request()?;
  let launch = scheduler::schedule(&*store, &*store, request).await?;
  Ok((StatusCode::CREATED, Json(launch)))
}

// ─── Abort ────────────────────────────────────────────────────────────────────

/// The `{id}` path segment of a launch route. Anything that is not a flight
/// number cannot name a stored launch, so it is rejected as not found.
#[derive(Debug, Clone, Copy)]
pub struct FlightNumber(pub u32);

impl<S> FromRequestParts<S> for FlightNumber
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &S,
  ) -> Result<Self, Self::Rejection> {
    let Path(flight_number) = Path::<u32>::from_request_parts(parts, state)
      .await
      .map_err(|_| ApiError::launch_not_found())?;
    Ok(Self(flight_number))
  }
}

/// `DELETE /launches/:id`
pub async fn abort<S>(
  State(store): State<Arc<S>>,
  FlightNumber(flight_number): FlightNumber,
) -> Result<impl IntoResponse, ApiError>
where
  S: LaunchStore,
{
  let exists = store
    .launch_exists(flight_number)
    .await
    .map_err(ApiError::store)?;
  if !exists {
    return Err(ApiError::launch_not_found());
  }

  let aborted = store
    .abort_launch(flight_number)
    .await
    .map_err(ApiError::store)?;
  if !aborted {
    return Err(ApiError::BadRequest("Launch not aborted".to_string()));
  }

  info!(flight_number, "aborted launch");
  Ok(Json(json!({ "ok": true })))
}
