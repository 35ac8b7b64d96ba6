//! SWAPI HTTP mock endpoint creation utilities.
//!
//! Each method registers a mock GET endpoint on the test server and returns the
//! [`Mock`] so the test can verify it was called the expected number of times.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::fixtures::swapi::{factory, SwapiFixtures};

impl<'a> SwapiFixtures<'a> {
    /// Create a mock endpoint for one page of people references.
    ///
    /// Matches `GET /people?page={page}&limit={limit}`. Reference locators point back
    /// at the mock server so follow-up detail requests can be mocked too.
    ///
    /// # Arguments
    /// - `page` / `limit` - Query parameters the request must carry
    /// - `references` - `(uid, name)` pairs returned in listing order
    /// - `total_records` - Count reported across all pages
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_people_page_endpoint(
        &mut self,
        page: u32,
        limit: u32,
        references: &[(&str, &str)],
        total_records: u32,
        expected_requests: usize,
    ) -> Mock {
        let body = factory::page(self.setup.api_url(), references, total_records, limit);

        self.json_endpoint("/people", body, expected_requests)
            .match_query(page_query(page, limit))
            .create()
    }

    /// Create a people listing endpoint that responds with `status` and no body.
    pub fn with_failing_people_page_endpoint(
        &mut self,
        page: u32,
        limit: u32,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/people")
            .match_query(page_query(page, limit))
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `/people/{uid}` returning `properties` in a
    /// single-resource envelope.
    pub fn with_person_endpoint(
        &mut self,
        uid: &str,
        properties: Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/people/{}", uid);

        self.json_endpoint(&path, factory::item(properties), expected_requests)
            .create()
    }

    /// Create a mock search endpoint matching `GET /people/?name={name}`.
    ///
    /// `name` is compared after URL decoding.
    pub fn with_search_endpoint(
        &mut self,
        name: &str,
        people: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.json_endpoint("/people/", factory::list(people), expected_requests)
            .match_query(Matcher::UrlEncoded("name".into(), name.into()))
            .create()
    }

    pub fn with_planet_endpoint(
        &mut self,
        uid: &str,
        name: &str,
        expected_requests: usize,
    ) -> Mock {
        self.named_endpoint("planets", uid, name, expected_requests)
    }

    /// Create a mock endpoint for the film catalog at `/films`.
    pub fn with_films_endpoint(&mut self, films: Vec<Value>, expected_requests: usize) -> Mock {
        self.json_endpoint("/films", factory::list(films), expected_requests)
            .create()
    }

    pub fn with_starship_endpoint(
        &mut self,
        uid: &str,
        name: &str,
        expected_requests: usize,
    ) -> Mock {
        self.named_endpoint("starships", uid, name, expected_requests)
    }

    pub fn with_vehicle_endpoint(
        &mut self,
        uid: &str,
        name: &str,
        expected_requests: usize,
    ) -> Mock {
        self.named_endpoint("vehicles", uid, name, expected_requests)
    }

    /// Create a mock endpoint at `path` that responds with `status` and an error body.
    pub fn with_failing_endpoint(
        &mut self,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "message": "not found" }).to_string())
            .expect(expected_requests)
            .create()
    }

    fn named_endpoint(
        &mut self,
        kind: &str,
        uid: &str,
        name: &str,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/{}/{}", kind, uid);
        let properties = json!({
            "name": name,
            "url": format!("{}{}", self.setup.api_url(), path),
        });

        self.json_endpoint(&path, factory::item(properties), expected_requests)
            .create()
    }

    fn json_endpoint(&mut self, path: &str, body: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
    }
}

fn page_query(page: u32, limit: u32) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("page".into(), page.to_string()),
        Matcher::UrlEncoded("limit".into(), limit.to_string()),
    ])
}
