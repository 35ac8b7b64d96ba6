//! Services behind the three screens.
//!
//! - `swapi` - typed wrappers over the catalog endpoints
//! - `aggregate` - bounded fan-out of per-character detail fetches for a page
//! - `browse` - paging and search state plus the list loader
//! - `detail` - the dependent fetch chain behind the detail screen
//! - `favorites` - the persisted favorites collection

pub mod aggregate;
pub mod browse;
pub mod detail;
pub mod favorites;
pub mod swapi;

pub use aggregate::{AggregateOutcome, DetailAggregator, FailedFetch};
pub use browse::{BrowseService, Listing, PageState};
pub use detail::CharacterDetailService;
pub use favorites::FavoritesStore;
pub use swapi::SwapiClient;
