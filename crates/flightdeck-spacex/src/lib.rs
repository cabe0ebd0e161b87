//! SpaceX v4 launch provider for Flightdeck.
//!
//! Two halves: the document types and the pure mapping into
//! [`flightdeck_core::launch::Launch`] (no I/O), and [`SpacexClient`], which
//! issues the single history query and implements
//! [`flightdeck_core::store::LaunchProvider`].

mod client;
pub mod error;
pub mod model;

pub use client::{DEFAULT_URL, SpacexClient};
pub use error::{Error, Result};
pub use model::{ExternalLaunch, map_launch};
