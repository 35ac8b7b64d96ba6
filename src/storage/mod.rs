//! Key/value persistence port.
//!
//! The favorites store only needs to read and overwrite whole values by key, so
//! the port is kept to `get` and `set`. The platform implementation is chosen by
//! target: `window.localStorage` in the browser, one JSON file per key on native
//! targets. [`MemoryStorage`] backs tests and any environment where neither is
//! available.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

use crate::error::StorageError;

/// Storage backend used by the application on the current target.
#[cfg(target_arch = "wasm32")]
pub type PlatformStorage = LocalStorage;
/// Storage backend used by the application on the current target.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = FileStorage;

/// Minimal string key/value storage.
///
/// Writes replace the whole value; there are no partial updates and no
/// coordination between concurrent writers, the last write wins.
pub trait KeyValueStorage {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(value))` - A value is stored under `key`
    /// - `Ok(None)` - Nothing is stored under `key`
    /// - `Err(StorageError)` - The backend could not be read
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
