//! Error type for `flightdeck-spacex`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("request failed: {0}")]
  Request(#[from] reqwest::Error),

  /// The provider answered with anything other than `200 OK`.
  #[error("provider answered with status {0}")]
  Status(u16),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
