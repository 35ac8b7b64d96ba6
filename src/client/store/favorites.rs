use dioxus::prelude::*;

use holocron::{
    error::Error, model::FavoriteRecord, service::FavoritesStore, storage::PlatformStorage,
};

/// Favorites shared between the detail and favorites views.
///
/// Wraps the persisted [`FavoritesStore`] with a signal holding its current
/// contents, refreshed after every mutation so subscribed views re-render.
#[derive(Clone)]
pub struct Favorites {
    store: FavoritesStore<PlatformStorage>,
    records: Signal<Vec<FavoriteRecord>>,
}

impl Favorites {
    pub fn new(store: FavoritesStore<PlatformStorage>) -> Self {
        let records = Signal::new(store.list());

        Self { store, records }
    }

    pub fn records(&self) -> Vec<FavoriteRecord> {
        self.records.read().clone()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.records.read().iter().any(|favorite| favorite.id == id)
    }

    /// Add or remove `record`, returning whether it is a favorite afterwards.
    pub fn toggle(&self, record: FavoriteRecord) -> Result<bool, Error> {
        let is_favorite = self.store.toggle(record)?;
        self.refresh();

        Ok(is_favorite)
    }

    pub fn remove(&self, id: &str) -> Result<bool, Error> {
        let removed = self.store.remove(id)?;
        self.refresh();

        Ok(removed)
    }

    fn refresh(&self) {
        let mut records = self.records;
        records.set(self.store.list());
    }
}
