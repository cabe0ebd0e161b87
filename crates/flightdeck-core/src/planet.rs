//! Planet catalog entries — the destinations a launch may target.

use serde::{Deserialize, Serialize};

/// A habitable-planet catalog entry, identified by its Kepler name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
  pub kepler_name: String,
}

impl Planet {
  pub fn new(kepler_name: impl Into<String>) -> Self {
    Self { kepler_name: kepler_name.into() }
  }
}
