use holocron::{
    service::{CharacterDetailService, FavoritesStore, SwapiClient},
    storage::MemoryStorage,
    transport::NativeFetch,
};
use holocron_test_utils::prelude::*;

/// Expect a resolved detail to be saved as a favorite with its home planet name
#[tokio::test]
async fn detail_becomes_favorite() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let api_url = test.api_url().to_string();
    let leia = factory::person_with(&api_url, "5", "Leia Organa", Some("2"), &[], &["30"]);
    let films = vec![factory::film(
        "Return of the Jedi",
        &[format!("{}/people/5/", api_url)],
    )];
    test.mocks = vec![
        test.swapi().with_person_endpoint("5", leia, 1),
        test.swapi().with_planet_endpoint("2", "Alderaan", 1),
        test.swapi().with_films_endpoint(films, 1),
        test.swapi().with_vehicle_endpoint("30", "Imperial Speeder Bike", 1),
    ];

    let client = SwapiClient::new(NativeFetch::new(), &api_url);
    let detail = CharacterDetailService::new(&client, 10)
        .get_character("5")
        .await;

    assert!(detail.is_ok());
    let detail = detail.unwrap();
    assert_eq!(detail.films, vec!["Return of the Jedi"]);
    assert!(detail.starships.is_empty());
    assert_eq!(detail.vehicles, vec!["Imperial Speeder Bike"]);

    let favorites = FavoritesStore::new(MemoryStorage::new(), "favorites");
    let added = favorites.toggle(detail.to_favorite("5"));

    assert!(matches!(added, Ok(true)));
    let records = favorites.list();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "5");
    assert_eq!(records[0].name, "Leia Organa");
    assert_eq!(records[0].homeworld.as_deref(), Some("Alderaan"));
    test.assert_mocks();

    Ok(())
}

/// Expect a failed film catalog request to fail the whole detail lookup
#[tokio::test]
async fn failed_film_catalog_fails_detail() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let api_url = test.api_url().to_string();
    let luke = factory::person(&api_url, "1", "Luke Skywalker");
    test.mocks = vec![
        test.swapi().with_person_endpoint("1", luke, 1),
        test.swapi().with_planet_endpoint("1", "Tatooine", 1),
        test.swapi().with_failing_endpoint("/films", 503, 1),
    ];

    let client = SwapiClient::new(NativeFetch::new(), &api_url);
    let result = CharacterDetailService::new(&client, 10)
        .get_character("1")
        .await;

    assert!(result.is_err());
    test.assert_mocks();

    Ok(())
}
