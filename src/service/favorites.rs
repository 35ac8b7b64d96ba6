//! Persisted favorites collection.
//!
//! The whole collection is stored as one JSON array under a single key. Reads are
//! forgiving: a missing or malformed value is an empty collection, and elements
//! that fail to decode are skipped. Mutations refuse to run over a value the
//! backend could not read. Every mutation rewrites the full array.

use std::collections::HashSet;

use dioxus_logger::tracing;

use crate::{
    error::{Error, StorageError},
    model::FavoriteRecord,
    storage::KeyValueStorage,
};

#[derive(Clone, Debug)]
pub struct FavoritesStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    /// Creates a new instance of [`FavoritesStore`] persisting under `key`
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// All favorites in insertion order.
    ///
    /// An unreadable value reads as empty. Elements that do not decode as a
    /// favorite are skipped, and duplicate ids left behind by older writers are
    /// collapsed to their first occurrence.
    pub fn list(&self) -> Vec<FavoriteRecord> {
        self.load().unwrap_or_else(|e| {
            tracing::warn!("Treating favorites as empty, storage read failed: {}", e);
            Vec::new()
        })
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.list().iter().any(|favorite| favorite.id == id)
    }

    /// Append `record` unless a favorite with the same id exists.
    ///
    /// # Returns
    /// - `Ok(true)` - The record was added
    /// - `Ok(false)` - A favorite with this id already exists; nothing was written
    /// - `Err(Error)` - The collection could not be written
    pub fn add(&self, record: FavoriteRecord) -> Result<bool, Error> {
        let mut favorites = self.load()?;

        if favorites.iter().any(|favorite| favorite.id == record.id) {
            return Ok(false);
        }

        tracing::debug!("Adding favorite {}", record.id);

        favorites.push(record);
        self.save(&favorites)?;

        Ok(true)
    }

    /// Remove the favorite with `id`.
    ///
    /// # Returns
    /// - `Ok(true)` - The favorite was removed
    /// - `Ok(false)` - No favorite had this id; nothing was written
    /// - `Err(Error)` - The collection could not be written
    pub fn remove(&self, id: &str) -> Result<bool, Error> {
        let favorites = self.load()?;
        let before = favorites.len();

        let remaining: Vec<FavoriteRecord> = favorites
            .into_iter()
            .filter(|favorite| favorite.id != id)
            .collect();

        if remaining.len() == before {
            return Ok(false);
        }

        tracing::debug!("Removing favorite {}", id);

        self.save(&remaining)?;

        Ok(true)
    }

    /// Flip membership of `record`, returning whether it is a favorite afterwards.
    pub fn toggle(&self, record: FavoriteRecord) -> Result<bool, Error> {
        if self.load()?.iter().any(|favorite| favorite.id == record.id) {
            self.remove(&record.id)?;
            Ok(false)
        } else {
            self.add(record)?;
            Ok(true)
        }
    }

    /// Read the collection for a mutation.
    ///
    /// A backend read failure is an error so the caller never overwrites a value
    /// it could not see. A value that is not a JSON array holds nothing worth
    /// keeping and reads as empty.
    fn load(&self) -> Result<Vec<FavoriteRecord>, Error> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };

        let elements: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(elements) => elements,
            Err(e) => {
                tracing::warn!("Treating favorites as empty, stored value is malformed: {}", e);
                return Ok(Vec::new());
            }
        };

        let mut seen = HashSet::new();
        let favorites = elements
            .into_iter()
            .filter_map(|element| match serde_json::from_value::<FavoriteRecord>(element) {
                Ok(favorite) => Some(favorite),
                Err(e) => {
                    tracing::warn!("Skipping malformed favorite: {}", e);
                    None
                }
            })
            .filter(|favorite| seen.insert(favorite.id.clone()))
            .collect();

        Ok(favorites)
    }

    fn save(&self, favorites: &[FavoriteRecord]) -> Result<(), Error> {
        let raw = serde_json::to_string(favorites).map_err(StorageError::from)?;

        self.storage.set(&self.key, &raw)?;

        Ok(())
    }
}
