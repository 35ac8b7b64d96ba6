//! Response envelopes returned by the SWAPI catalog.
//!
//! The catalog wraps every payload in one of three shapes: a paginated listing of
//! lightweight references, a single resource, or a list of resources with their
//! properties inlined (search results and the film catalog).

use serde::Deserialize;

/// Paginated listing, e.g. `GET /people?page=1&limit=10`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvelope<T> {
    /// Number of records across all pages.
    pub total_records: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Single resource, e.g. `GET /people/1`.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemEnvelope<P> {
    pub result: Resource<P>,
}

/// Resources with inlined properties, e.g. `GET /people/?name=luke` or `GET /films`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<P> {
    #[serde(default = "Vec::new")]
    pub result: Vec<Resource<P>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Resource<P> {
    pub properties: P,
}

/// Properties of a person resource.
///
/// Every field defaults when absent; the catalog omits `starships` and `vehicles`
/// for most people.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonProperties {
    pub name: String,
    pub height: String,
    pub hair_color: String,
    pub eye_color: String,
    pub gender: String,
    pub homeworld: Option<String>,
    pub url: String,
    pub starships: Option<Vec<String>>,
    pub vehicles: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlanetProperties {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilmProperties {
    pub title: String,
    /// Locators of every person appearing in the film.
    pub characters: Vec<String>,
}

/// Properties of a starship or vehicle; only the name is displayed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CraftProperties {
    pub name: String,
}
