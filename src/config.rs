use std::path::PathBuf;
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use crate::error::ConfigError;

/// Base URL of the public SWAPI catalog.
pub const DEFAULT_API_URL: &str = "https://www.swapi.tech/api";
/// Number of characters shown per page of the browse view.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Quiet period before a search query is sent.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;
/// Upper bound on outstanding detail requests while aggregating a page.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 10;
/// Storage key holding the serialized favorites collection.
pub const DEFAULT_FAVORITES_KEY: &str = "favorites";

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the upstream catalog, without a trailing slash.
    pub api_url: String,
    /// Records requested per browse page.
    pub page_size: u32,
    /// How long the search box must be idle before a query is sent (milliseconds).
    pub search_debounce_ms: u64,
    /// Maximum concurrent detail fetches when aggregating a page.
    pub max_in_flight: usize,
    /// Key under which favorites are persisted.
    pub favorites_key: String,
    /// Directory used by file-backed storage on native targets.
    pub data_dir: PathBuf,
}

impl Config {
    /// Get the search debounce delay as Duration
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Reads a `.env` file if one is present. Every variable is optional:
    /// - `HOLOCRON_API_URL`
    /// - `HOLOCRON_PAGE_SIZE`
    /// - `HOLOCRON_MAX_IN_FLIGHT`
    /// - `HOLOCRON_DATA_DIR`
    ///
    /// # Returns
    /// - `Ok(Config)` - Defaults overridden by any variables that are set
    /// - `Err(ConfigError)` - A variable is set but cannot be parsed or is zero
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(api_url) = std::env::var("HOLOCRON_API_URL") {
            config.api_url = api_url.trim_end_matches('/').to_string();
        }
        if let Some(page_size) = parse_non_zero::<u32>("HOLOCRON_PAGE_SIZE")? {
            config.page_size = page_size;
        }
        if let Some(max_in_flight) = parse_non_zero::<usize>("HOLOCRON_MAX_IN_FLIGHT")? {
            config.max_in_flight = max_in_flight;
        }
        if let Ok(data_dir) = std::env::var("HOLOCRON_DATA_DIR") {
            config.data_dir = PathBuf::from(data_dir);
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            favorites_key: DEFAULT_FAVORITES_KEY.to_string(),
            data_dir: PathBuf::from(".holocron"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_non_zero<T>(var: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
    T::Err: std::fmt::Display,
{
    let Ok(raw) = std::env::var(var) else {
        return Ok(None);
    };

    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })?;

    if value == T::default() {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(Some(value))
}
