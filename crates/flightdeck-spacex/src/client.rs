//! Async HTTP client for the SpaceX launch query endpoint.

use std::time::Duration;

use flightdeck_core::{launch::Launch, store::LaunchProvider};
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::{
  Error, Result,
  model::{ExternalLaunch, QueryResponse, decode_docs, map_launch, query_body},
};

pub const DEFAULT_URL: &str = "https://api.spacexdata.com/v4/launches/query";

/// Fetches the full launch history from the provider.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct SpacexClient {
  client: Client,
  url:    String,
}

impl SpacexClient {
  pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
    let client = Client::builder().timeout(timeout).build()?;
    Ok(Self { client, url: url.into() })
  }

  /// `POST <url>` with the history query. Anything but `200 OK` fails, as
  /// does an undecodable envelope; malformed documents inside it are skipped.
  pub async fn query(&self) -> Result<Vec<ExternalLaunch>> {
    let resp = self
      .client
      .post(&self.url)
      .json(&query_body())
      .send()
      .await?;

    if resp.status() != StatusCode::OK {
      return Err(Error::Status(resp.status().as_u16()));
    }

    let body: QueryResponse = resp.json().await?;
    debug!(docs = body.docs.len(), url = %self.url, "received launch history");
    Ok(decode_docs(body.docs))
  }
}

impl LaunchProvider for SpacexClient {
  type Error = Error;

  async fn fetch_launches(&self) -> Result<Vec<Launch>> {
    Ok(self.query().await?.into_iter().map(map_launch).collect())
  }
}

#[cfg(test)]
mod tests {
  use axum::{Json, Router, http::StatusCode as AxumStatus, routing::post};
  use serde_json::{Value, json};
  use tokio::net::TcpListener;

  use super::*;

  /// Serve `router` on an ephemeral port and return the query URL.
  async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    format!("http://{addr}/v4/launches/query")
  }

  fn client(url: String) -> SpacexClient {
    SpacexClient::new(url, Duration::from_secs(5)).unwrap()
  }

  #[tokio::test]
  async fn fetches_and_maps_history() {
    let router = Router::new().route(
      "/v4/launches/query",
      post(|Json(body): Json<Value>| async move {
        assert_eq!(body["options"]["pagination"], json!(false));
        Json(json!({
          "docs": [
            {
              "flight_number": 2,
              "name": "DemoSat",
              "rocket": { "name": "Falcon 1" },
              "date_local": "2007-03-21T13:10:00+12:00",
              "upcoming": false,
              "success": false,
              "payloads": [ { "customers": ["DARPA"] }, { "customers": ["NASA"] } ]
            }
          ]
        }))
      }),
    );
    let url = serve(router).await;

    let launches = client(url).fetch_launches().await.unwrap();

    assert_eq!(launches.len(), 1);
    assert_eq!(launches[0].flight_number, 2);
    assert_eq!(launches[0].rocket, "Falcon 1");
    assert_eq!(launches[0].customers, ["DARPA", "NASA"]);
  }

  #[tokio::test]
  async fn one_bad_document_does_not_fail_the_fetch() {
    let router = Router::new().route(
      "/v4/launches/query",
      post(|| async {
        Json(json!({
          "docs": [
            { "flight_number": 3, "name": "Trailblazer", "upcoming": false },
            {
              "flight_number": 4,
              "name": "RatSat",
              "rocket": { "name": "Falcon 1" },
              "date_local": "2008-09-28T11:15:00+12:00",
              "upcoming": false,
              "success": true,
              "payloads": []
            }
          ]
        }))
      }),
    );
    let url = serve(router).await;

    let launches = client(url).fetch_launches().await.unwrap();

    assert_eq!(launches.len(), 1);
    assert_eq!(launches[0].mission, "RatSat");
  }

  #[tokio::test]
  async fn missing_envelope_is_an_error() {
    let router = Router::new().route(
      "/v4/launches/query",
      post(|| async { Json(json!({ "results": [] })) }),
    );
    let url = serve(router).await;

    let err = client(url).query().await.unwrap_err();
    assert!(matches!(err, Error::Request(_)));
  }

  #[tokio::test]
  async fn non_ok_status_is_an_error() {
    let router = Router::new().route(
      "/v4/launches/query",
      post(|| async { (AxumStatus::SERVICE_UNAVAILABLE, "down") }),
    );
    let url = serve(router).await;

    let err = client(url).query().await.unwrap_err();
    assert!(matches!(err, Error::Status(503)));
  }

  #[tokio::test]
  async fn other_success_codes_are_rejected_too() {
    let router = Router::new().route(
      "/v4/launches/query",
      post(|| async { (AxumStatus::CREATED, Json(json!({ "docs": [] }))) }),
    );
    let url = serve(router).await;

    let err = client(url).query().await.unwrap_err();
    assert!(matches!(err, Error::Status(201)));
  }
}
