use serde::Deserialize;

use crate::model::{api::PersonProperties, FavoriteRecord};

/// One item of a paginated people listing: an identifier plus the locator of the
/// full record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReferenceRecord {
    pub uid: String,
    #[serde(default)]
    pub name: String,
    pub url: String,
}

/// A row of the browse table.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterSummary {
    pub name: String,
    pub gender: String,
    /// Locator of the home planet; the list view does not resolve it.
    pub homeworld: String,
    /// Locator of the person, unique per character.
    pub url: String,
}

impl CharacterSummary {
    /// The catalog identifier of this character, taken from its locator.
    pub fn uid(&self) -> Option<&str> {
        uid_from_url(&self.url)
    }
}

impl From<PersonProperties> for CharacterSummary {
    fn from(person: PersonProperties) -> Self {
        Self {
            name: person.name,
            gender: person.gender,
            homeworld: person.homeworld.unwrap_or_default(),
            url: person.url,
        }
    }
}

/// Everything the detail view shows for one character.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterDetail {
    pub name: String,
    pub height: String,
    pub hair_color: String,
    pub eye_color: String,
    pub gender: String,
    /// Resolved name of the home planet.
    pub homeworld: String,
    /// Titles of films the character appears in, in catalog order.
    pub films: Vec<String>,
    pub starships: Vec<String>,
    pub vehicles: Vec<String>,
}

impl CharacterDetail {
    /// Snapshot of this character suitable for the favorites collection.
    pub fn to_favorite(&self, id: &str) -> FavoriteRecord {
        FavoriteRecord {
            id: id.to_string(),
            name: self.name.clone(),
            height: non_empty(&self.height),
            gender: non_empty(&self.gender),
            homeworld: non_empty(&self.homeworld),
        }
    }
}

/// Extract the trailing identifier from a resource locator.
///
/// `https://www.swapi.tech/api/people/12/` yields `Some("12")`.
pub fn uid_from_url(url: &str) -> Option<&str> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty() && !segment.contains(':'))
}

/// Compare two locators, ignoring trailing slashes.
pub fn same_locator(a: &str, b: &str) -> bool {
    a.trim_end_matches('/') == b.trim_end_matches('/')
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
