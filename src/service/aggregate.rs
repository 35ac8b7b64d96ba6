//! Detail aggregation for a page of people references.
//!
//! A listing page only carries `{uid, name, url}` per person; the browse table also
//! needs gender and homeworld, so every reference is dereferenced. Fetches run with
//! at most `max_in_flight` outstanding and the results keep the order of the
//! listing. A failed fetch drops that row but never its siblings; the failures are
//! reported alongside the rows so the view can flag a partial page.

use std::collections::HashSet;

use dioxus_logger::tracing;
use futures::stream::{self, StreamExt};

use crate::{
    model::{api::PersonProperties, CharacterSummary, ReferenceRecord},
    service::swapi::SwapiClient,
    transport::Fetch,
};

/// A reference whose detail record could not be fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedFetch {
    pub uid: String,
    pub url: String,
    pub reason: String,
}

/// Rows of an aggregated page plus the references that could not be resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateOutcome {
    /// Resolved rows in listing order.
    pub characters: Vec<CharacterSummary>,
    pub failed: Vec<FailedFetch>,
}

impl AggregateOutcome {
    /// Whether any reference on the page failed to resolve.
    pub fn is_partial(&self) -> bool {
        !self.failed.is_empty()
    }
}

pub struct DetailAggregator<'a, F> {
    client: &'a SwapiClient<F>,
    max_in_flight: usize,
}

impl<'a, F: Fetch> DetailAggregator<'a, F> {
    /// Creates a new instance of [`DetailAggregator`]
    ///
    /// `max_in_flight` is clamped to at least 1.
    pub fn new(client: &'a SwapiClient<F>, max_in_flight: usize) -> Self {
        Self {
            client,
            max_in_flight: max_in_flight.max(1),
        }
    }

    /// Fetch the detail record of every reference and assemble the page.
    ///
    /// References sharing a uid are fetched once; the first occurrence decides
    /// the row position.
    pub async fn aggregate(&self, references: &[ReferenceRecord]) -> AggregateOutcome {
        let mut seen = HashSet::new();
        let unique: Vec<&ReferenceRecord> = references
            .iter()
            .filter(|reference| seen.insert(reference.uid.as_str()))
            .collect();

        let results: Vec<_> = stream::iter(unique)
            .map(|reference| async move {
                let result = self
                    .client
                    .resource::<PersonProperties>(&reference.url)
                    .await;
                (reference, result)
            })
            .buffered(self.max_in_flight)
            .collect()
            .await;

        let mut outcome = AggregateOutcome::default();

        for (reference, result) in results {
            match result {
                Ok(person) => outcome.characters.push(CharacterSummary::from(person)),
                Err(e) => {
                    tracing::warn!("Failed to fetch character {}: {}", reference.uid, e);

                    outcome.failed.push(FailedFetch {
                        uid: reference.uid.clone(),
                        url: reference.url.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        if outcome.is_partial() {
            tracing::warn!(
                "Aggregated {} of {} characters, {} failed",
                outcome.characters.len(),
                outcome.characters.len() + outcome.failed.len(),
                outcome.failed.len()
            );
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use holocron_test_utils::prelude::*;
    use serde::de::DeserializeOwned;

    use super::*;
    use crate::{error::ApiError, transport::NativeFetch};

    fn reference(api_url: &str, uid: &str, name: &str) -> ReferenceRecord {
        ReferenceRecord {
            uid: uid.to_string(),
            name: name.to_string(),
            url: format!("{}/people/{}", api_url, uid),
        }
    }

    /// Transport answering person lookups after a delay that shrinks with the uid,
    /// so later references complete first, while recording peak concurrency.
    #[derive(Clone, Default)]
    struct SlowFetch {
        in_flight: Arc<AtomicUsize>,
        peak: Arc<AtomicUsize>,
    }

    impl Fetch for SlowFetch {
        async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
            let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(current, Ordering::SeqCst);

            let uid: u64 = url.rsplit('/').next().unwrap().parse().unwrap();
            tokio::time::sleep(Duration::from_millis(100 - uid)).await;

            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            let person = factory::person(
                "https://swapi.test/api",
                &uid.to_string(),
                &format!("Person {}", uid),
            );
            Ok(serde_json::from_value(factory::item(person)).unwrap())
        }
    }

    /// Expect every reference to resolve into a row, in listing order
    #[tokio::test]
    async fn resolves_page_in_listing_order() -> Result<(), TestError> {
        let mut test = TestSetup::new().await;
        let api_url = test.api_url().to_string();
        let luke = factory::person(&api_url, "1", "Luke Skywalker");
        let threepio = factory::person(&api_url, "2", "C-3PO");
        let endpoints = vec![
            test.swapi().with_person_endpoint("1", luke, 1),
            test.swapi().with_person_endpoint("2", threepio, 1),
        ];

        let client = SwapiClient::new(NativeFetch::new(), &api_url);
        let references = vec![
            reference(&api_url, "1", "Luke Skywalker"),
            reference(&api_url, "2", "C-3PO"),
        ];

        let outcome = DetailAggregator::new(&client, 10)
            .aggregate(&references)
            .await;

        assert!(!outcome.is_partial());
        let names: Vec<&str> = outcome.characters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Luke Skywalker", "C-3PO"]);
        assert_eq!(outcome.characters[0].gender, "male");
        for endpoint in endpoints {
            endpoint.assert();
        }

        Ok(())
    }

    /// Expect a failed fetch to be reported without dropping its siblings
    #[tokio::test]
    async fn reports_failed_fetch_and_keeps_siblings() -> Result<(), TestError> {
        let mut test = TestSetup::new().await;
        let api_url = test.api_url().to_string();
        let luke = factory::person(&api_url, "1", "Luke Skywalker");
        let leia = factory::person(&api_url, "5", "Leia Organa");
        let endpoints = vec![
            test.swapi().with_person_endpoint("1", luke, 1),
            test.swapi().with_failing_endpoint("/people/2", 500, 1),
            test.swapi().with_person_endpoint("5", leia, 1),
        ];

        let client = SwapiClient::new(NativeFetch::new(), &api_url);
        let references = vec![
            reference(&api_url, "1", "Luke Skywalker"),
            reference(&api_url, "2", "C-3PO"),
            reference(&api_url, "5", "Leia Organa"),
        ];

        let outcome = DetailAggregator::new(&client, 10)
            .aggregate(&references)
            .await;

        assert!(outcome.is_partial());
        assert_eq!(outcome.characters.len(), 2);
        assert_eq!(outcome.characters[1].name, "Leia Organa");
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].uid, "2");
        for endpoint in endpoints {
            endpoint.assert();
        }

        Ok(())
    }

    /// Expect duplicate references to be fetched once
    #[tokio::test]
    async fn fetches_duplicate_reference_once() -> Result<(), TestError> {
        let mut test = TestSetup::new().await;
        let api_url = test.api_url().to_string();
        let luke = factory::person(&api_url, "1", "Luke Skywalker");
        let endpoint = test.swapi().with_person_endpoint("1", luke, 1);

        let client = SwapiClient::new(NativeFetch::new(), &api_url);
        let references = vec![
            reference(&api_url, "1", "Luke Skywalker"),
            reference(&api_url, "1", "Luke Skywalker"),
        ];

        let outcome = DetailAggregator::new(&client, 10)
            .aggregate(&references)
            .await;

        assert_eq!(outcome.characters.len(), 1);
        endpoint.assert();

        Ok(())
    }

    /// Expect an empty page to produce an empty outcome without requests
    #[tokio::test]
    async fn empty_page_yields_empty_outcome() {
        let client = SwapiClient::new(SlowFetch::default(), "https://swapi.test/api");

        let outcome = DetailAggregator::new(&client, 10).aggregate(&[]).await;

        assert_eq!(outcome, AggregateOutcome::default());
    }

    /// Expect source order even when later fetches complete first
    #[tokio::test(start_paused = true)]
    async fn keeps_source_order_regardless_of_completion() {
        let fetch = SlowFetch::default();
        let client = SwapiClient::new(fetch.clone(), "https://swapi.test/api");
        let references: Vec<ReferenceRecord> = (1..=10)
            .map(|uid| reference("https://swapi.test/api", &uid.to_string(), "ref"))
            .collect();

        let outcome = DetailAggregator::new(&client, 10)
            .aggregate(&references)
            .await;

        let names: Vec<String> = outcome.characters.iter().map(|c| c.name.clone()).collect();
        let expected: Vec<String> = (1..=10).map(|uid| format!("Person {}", uid)).collect();
        assert_eq!(names, expected);
    }

    /// Expect outstanding requests to never exceed max_in_flight
    #[tokio::test(start_paused = true)]
    async fn bounds_outstanding_requests() {
        let fetch = SlowFetch::default();
        let client = SwapiClient::new(fetch.clone(), "https://swapi.test/api");
        let references: Vec<ReferenceRecord> = (1..=12)
            .map(|uid| reference("https://swapi.test/api", &uid.to_string(), "ref"))
            .collect();

        let outcome = DetailAggregator::new(&client, 3)
            .aggregate(&references)
            .await;

        assert_eq!(outcome.characters.len(), 12);
        assert_eq!(
            fetch.peak.load(Ordering::SeqCst),
            3,
            "Peak concurrency should match max_in_flight"
        );
    }
}
