use holocron::{
    error::{ApiError, Error},
    service::{BrowseService, Listing, PageState, SwapiClient},
    transport::NativeFetch,
};
use holocron_test_utils::prelude::*;

/// Expect a short catalog to fit on one page with both controls disabled
#[tokio::test]
async fn short_catalog_fits_on_one_page() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let api_url = test.api_url().to_string();
    let luke = factory::person(&api_url, "1", "Luke Skywalker");
    let threepio = factory::person(&api_url, "2", "C-3PO");
    test.mocks = vec![
        test.swapi().with_people_page_endpoint(
            1,
            10,
            &[("1", "Luke Skywalker"), ("2", "C-3PO")],
            2,
            1,
        ),
        test.swapi().with_person_endpoint("1", luke, 1),
        test.swapi().with_person_endpoint("2", threepio, 1),
    ];

    let client = SwapiClient::new(NativeFetch::new(), &api_url);
    let service = BrowseService::new(&client, 10, 10);
    let mut state = PageState::default();

    let listing = service.load(state.current_page, &state.search_query).await;

    assert!(listing.is_ok());
    let listing = listing.unwrap();
    if let Listing::Browse { total_pages, .. } = &listing {
        state.set_total_pages(*total_pages);
    }
    assert_eq!(listing.characters().len(), 2);
    assert_eq!(state.total_pages, 1);
    assert!(!state.has_previous());
    assert!(!state.has_next());
    test.assert_mocks();

    Ok(())
}

/// Expect clearing the search query to return to page 1 of the browse listing
#[tokio::test]
async fn clearing_search_restores_first_page() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let api_url = test.api_url().to_string();
    let luke = factory::person(&api_url, "1", "Luke Skywalker");
    test.mocks = vec![
        test.swapi().with_people_page_endpoint(2, 10, &[("11", "Anakin Skywalker")], 82, 1),
        test.swapi().with_person_endpoint(
            "11",
            factory::person(&api_url, "11", "Anakin Skywalker"),
            1,
        ),
        test.swapi().with_search_endpoint("luke", vec![luke.clone()], 1),
        test.swapi().with_people_page_endpoint(1, 10, &[("1", "Luke Skywalker")], 82, 1),
        test.swapi().with_person_endpoint("1", luke, 1),
    ];

    let client = SwapiClient::new(NativeFetch::new(), &api_url);
    let service = BrowseService::new(&client, 10, 10);
    let mut state = PageState::default();
    state.set_total_pages(9);
    state.next();

    let second_page = service.load(state.current_page, &state.search_query).await;
    assert!(second_page.is_ok());
    assert_eq!(second_page.unwrap().characters()[0].name, "Anakin Skywalker");

    state.set_search_query("luke");
    let search = service.load(state.current_page, &state.search_query).await;
    assert!(search.is_ok());
    assert!(matches!(search.unwrap(), Listing::Search { .. }));
    assert!(!state.shows_pagination());

    state.set_search_query("");
    let first_page = service.load(state.current_page, &state.search_query).await;
    assert!(first_page.is_ok());
    let first_page = first_page.unwrap();
    assert!(matches!(
        first_page,
        Listing::Browse {
            page: 1,
            total_pages: 9,
            ..
        }
    ));
    assert_eq!(first_page.characters()[0].name, "Luke Skywalker");
    assert!(state.shows_pagination());
    test.assert_mocks();

    Ok(())
}

/// Expect a page with one broken record to render its siblings and report the failure
#[tokio::test]
async fn broken_record_degrades_page() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let api_url = test.api_url().to_string();
    let luke = factory::person(&api_url, "1", "Luke Skywalker");
    test.mocks = vec![
        test.swapi().with_people_page_endpoint(
            1,
            10,
            &[("1", "Luke Skywalker"), ("2", "C-3PO")],
            2,
            1,
        ),
        test.swapi().with_person_endpoint("1", luke, 1),
        test.swapi().with_failing_endpoint("/people/2", 500, 1),
    ];

    let client = SwapiClient::new(NativeFetch::new(), &api_url);
    let listing = BrowseService::new(&client, 10, 10).load(1, "").await;

    assert!(listing.is_ok());
    let listing = listing.unwrap();
    assert_eq!(listing.characters().len(), 1);
    assert_eq!(listing.failed_count(), 1);
    test.assert_mocks();

    Ok(())
}

/// Expect the failure trigger to fail regardless of the current page
#[tokio::test]
async fn error_query_fails_load() -> Result<(), TestError> {
    let test = TestSetup::new().await;

    let client = SwapiClient::new(NativeFetch::new(), test.api_url());
    let result = BrowseService::new(&client, 10, 10).load(5, "Error").await;

    assert!(matches!(result, Err(Error::ApiError(ApiError::Triggered))));
    if let Err(e) = result {
        assert_eq!(e.to_string(), "Error triggered for testing.");
    }

    Ok(())
}
