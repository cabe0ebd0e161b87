//! Core types and trait definitions for the Flightdeck launch tracker.
//!
//! This crate is deliberately free of HTTP and database dependencies. It owns
//! the launch record model, the storage and provider abstractions, and the two
//! workflows built on top of them: scheduling new flights and synchronising
//! the provider's launch history.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod launch;
pub mod planet;
pub mod scheduler;
pub mod store;
pub mod sync;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
