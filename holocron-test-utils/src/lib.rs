//! Test utilities for Holocron.
//!
//! Provides a [`TestSetup`] wrapping a `mockito` server that stands in for the SWAPI
//! catalog, JSON factories shaped like real catalog payloads, and endpoint helpers
//! that verify how often each endpoint is hit.

pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{fixtures::swapi::factory, TestError, TestSetup};
}
