use serde::de::DeserializeOwned;

use crate::{
    error::ApiError,
    model::{
        api::{FilmProperties, ItemEnvelope, ListEnvelope, PageEnvelope, PersonProperties},
        ReferenceRecord,
    },
    transport::Fetch,
};

/// Typed access to the SWAPI catalog.
#[derive(Clone, Debug)]
pub struct SwapiClient<F> {
    fetch: F,
    api_url: String,
}

impl<F: Fetch> SwapiClient<F> {
    /// Creates a new instance of [`SwapiClient`] rooted at `api_url`
    pub fn new(fetch: F, api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();

        Self {
            fetch,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Locator of the person with identifier `uid`.
    pub fn person_url(&self, uid: &str) -> String {
        format!("{}/people/{}", self.api_url, uid)
    }

    /// One page of people references, `GET /people?page=&limit=`.
    pub async fn people_page(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<PageEnvelope<ReferenceRecord>, ApiError> {
        let url = format!("{}/people?page={}&limit={}", self.api_url, page, limit);

        self.fetch.get_json(&url).await
    }

    /// People whose name matches `name`, with properties inlined, `GET /people/?name=`.
    pub async fn search_people(&self, name: &str) -> Result<Vec<PersonProperties>, ApiError> {
        let url = format!(
            "{}/people/?name={}",
            self.api_url,
            urlencoding::encode(name)
        );

        let envelope: ListEnvelope<PersonProperties> = self.fetch.get_json(&url).await?;

        Ok(envelope
            .result
            .into_iter()
            .map(|resource| resource.properties)
            .collect())
    }

    /// Full record of one person, `GET /people/{uid}`.
    pub async fn person(&self, uid: &str) -> Result<PersonProperties, ApiError> {
        if uid.is_empty() || uid.contains('/') || uid.contains('?') {
            return Err(ApiError::InvalidLocator(uid.to_string()));
        }

        self.resource(&self.person_url(uid)).await
    }

    /// Properties of the single resource at `url`.
    pub async fn resource<P: DeserializeOwned>(&self, url: &str) -> Result<P, ApiError> {
        if url.is_empty() {
            return Err(ApiError::InvalidLocator(url.to_string()));
        }

        let envelope: ItemEnvelope<P> = self.fetch.get_json(url).await?;

        Ok(envelope.result.properties)
    }

    /// The full film catalog, `GET /films`.
    pub async fn films(&self) -> Result<Vec<FilmProperties>, ApiError> {
        let url = format!("{}/films", self.api_url);

        let envelope: ListEnvelope<FilmProperties> = self.fetch.get_json(&url).await?;

        Ok(envelope
            .result
            .into_iter()
            .map(|resource| resource.properties)
            .collect())
    }
}
