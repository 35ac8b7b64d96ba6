use futures::stream::{self, StreamExt, TryStreamExt};

use crate::{
    error::Error,
    model::{
        api::{CraftProperties, PlanetProperties},
        character::same_locator,
        CharacterDetail,
    },
    service::swapi::SwapiClient,
    transport::Fetch,
};

pub struct CharacterDetailService<'a, F> {
    client: &'a SwapiClient<F>,
    max_in_flight: usize,
}

impl<'a, F: Fetch> CharacterDetailService<'a, F> {
    /// Creates a new instance of [`CharacterDetailService`]
    pub fn new(client: &'a SwapiClient<F>, max_in_flight: usize) -> Self {
        Self {
            client,
            max_in_flight: max_in_flight.max(1),
        }
    }

    /// Fetch a character and everything the detail screen shows about it.
    ///
    /// Runs the person lookup, then its home planet, then the film catalog
    /// (filtered to films listing this person), then its starships and vehicles
    /// together under one `max_in_flight` bound.
    /// Any failed step fails the whole lookup; there is no partial result.
    pub async fn get_character(&self, uid: &str) -> Result<CharacterDetail, Error> {
        let person = self.client.person(uid).await?;

        let homeworld = match person.homeworld.as_deref() {
            Some(url) if !url.is_empty() => {
                self.client
                    .resource::<PlanetProperties>(url)
                    .await?
                    .name
            }
            _ => String::new(),
        };

        let locator = self.client.person_url(uid);
        let films = self
            .client
            .films()
            .await?
            .into_iter()
            .filter(|film| {
                film.characters.iter().any(|character| {
                    same_locator(character, &locator)
                        || (!person.url.is_empty() && same_locator(character, &person.url))
                })
            })
            .map(|film| film.title)
            .collect();

        let starship_urls = person.starships.as_deref().unwrap_or_default();
        let vehicle_urls = person.vehicles.as_deref().unwrap_or_default();

        let mut starships = self
            .craft_names(starship_urls.iter().chain(vehicle_urls))
            .await?;
        let vehicles = starships.split_off(starship_urls.len());

        Ok(CharacterDetail {
            name: person.name,
            height: person.height,
            hair_color: person.hair_color,
            eye_color: person.eye_color,
            gender: person.gender,
            homeworld,
            films,
            starships,
            vehicles,
        })
    }

    /// Resolve starship or vehicle locators to names, keeping their order.
    async fn craft_names<'u>(
        &self,
        urls: impl Iterator<Item = &'u String>,
    ) -> Result<Vec<String>, Error> {
        let names: Vec<String> = stream::iter(urls)
            .map(|url| async move {
                self.client
                    .resource::<CraftProperties>(url)
                    .await
                    .map(|craft| craft.name)
            })
            .buffered(self.max_in_flight)
            .try_collect()
            .await?;

        Ok(names)
    }
}
