//! Error types for `flightdeck-core`.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
  /// The storage backend could not complete a read or write.
  #[error("storage unavailable: {0}")]
  UnavailableStorage(#[source] BoxError),

  /// The launch provider could not deliver its launch history.
  #[error("launch sync failed: {0}")]
  SyncFailed(#[source] BoxError),

  /// A launch was scheduled against a planet missing from the catalog.
  #[error("no matching planet was found: {0:?}")]
  UnknownTarget(String),
}

impl Error {
  pub fn storage<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::UnavailableStorage(Box::new(err))
  }

  pub fn sync<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::SyncFailed(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
