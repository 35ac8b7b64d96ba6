use dioxus::prelude::*;
use dioxus_logger::tracing;

use holocron::{
    config::Config,
    service::{FavoritesStore, SwapiClient},
    storage::PlatformStorage,
    transport::PlatformFetch,
};

use crate::client::{router::Route, store::favorites::Favorites};

/// Services shared by every route.
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub client: SwapiClient<PlatformFetch>,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let client = SwapiClient::new(PlatformFetch::default(), config.api_url.clone());

        Self { config, client }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_storage(config: &Config) -> PlatformStorage {
    PlatformStorage::new(config.data_dir.clone())
}

#[cfg(target_arch = "wasm32")]
fn platform_storage(_config: &Config) -> PlatformStorage {
    PlatformStorage::new()
}

#[component]
pub fn App() -> Element {
    let config = use_context::<Config>();
    let app = use_context_provider(|| {
        let app = AppContext::new(config);
        tracing::info!("Using catalog at {}", app.client.api_url());

        app
    });
    use_context_provider(|| {
        let store = FavoritesStore::new(
            platform_storage(&app.config),
            app.config.favorites_key.clone(),
        );

        Favorites::new(store)
    });

    rsx! {
        Router::<Route> {}
    }
}
