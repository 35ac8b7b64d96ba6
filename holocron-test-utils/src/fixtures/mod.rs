//! Test fixture modules for mock catalog data and HTTP endpoints.
//!
//! - `swapi` - people, planets, films, starships and vehicles served by the mock catalog

pub mod swapi;
