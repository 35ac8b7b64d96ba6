//! Error types for Holocron.
//!
//! Errors are split by domain: `ApiError` for anything that goes wrong talking to
//! the upstream catalog, `StorageError` for the key/value persistence port, and
//! `ConfigError` for invalid configuration. The top-level [`Error`] aggregates them
//! so services can use `?` across domains.

pub mod api;
pub mod config;
pub mod storage;

use thiserror::Error;

pub use api::ApiError;
pub use config::ConfigError;
pub use storage::StorageError;

/// Main error type for Holocron.
///
/// Views only ever see this type; they render its `Display` output in the failure
/// boundary fallback.
#[derive(Error, Debug)]
pub enum Error {
    /// Upstream catalog error (transport, HTTP status, decoding).
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Persistent storage error (unavailable backend, read/write failures).
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Configuration error (invalid environment values).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
}
