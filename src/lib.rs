//! Core of the Holocron character browser.
//!
//! Everything here is independent of the view layer: the SWAPI client and
//! detail aggregator, the favorites store with its pluggable storage port,
//! and the debounce and request-sequence utilities the views are built on.

pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod storage;
pub mod transport;
pub mod util;
