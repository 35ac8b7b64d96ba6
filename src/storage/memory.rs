use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{error::StorageError, storage::KeyValueStorage};

/// In-process storage.
///
/// Clones share the same map, so a clone handed to a store and one kept by a test
/// observe the same writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.read().map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.write().map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        values.insert(key.to_string(), value.to_string());

        Ok(())
    }
}
