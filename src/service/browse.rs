//! Paging and search for the character list.
//!
//! [`PageState`] is the list view's navigation state; [`BrowseService`] turns a
//! page number or search query into a [`Listing`]. Browsing aggregates per-person
//! details for a page of references, searching returns records with properties
//! already inlined and never paginates.

use dioxus_logger::tracing;

use crate::{
    error::{ApiError, Error},
    model::CharacterSummary,
    service::{
        aggregate::{AggregateOutcome, DetailAggregator},
        swapi::SwapiClient,
    },
    transport::Fetch,
};

/// Query that deliberately fails, used to exercise the failure boundary.
pub const FAILURE_TRIGGER_QUERY: &str = "error";

/// Number of pages needed for `total_records`, never less than one.
pub fn total_pages(total_records: u32, page_size: u32) -> u32 {
    total_records.div_ceil(page_size.max(1)).max(1)
}

/// Navigation state of the list view.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
    pub search_query: String,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            search_query: String::new(),
        }
    }
}

impl PageState {
    pub fn is_searching(&self) -> bool {
        !self.search_query.is_empty()
    }

    /// Pagination controls are hidden while a search query is present.
    pub fn shows_pagination(&self) -> bool {
        !self.is_searching()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Step back one page; ignored on the first page or while searching.
    pub fn previous(&mut self) {
        if self.is_searching() {
            return;
        }

        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// Step forward one page; ignored on the last page or while searching.
    pub fn next(&mut self) {
        if self.is_searching() {
            return;
        }

        self.current_page = (self.current_page + 1).min(self.total_pages);
    }

    /// Replace the search query. Any edit of the query returns to the first page.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
    }

    /// Record the page count reported by a browse load, keeping the current page
    /// in range.
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages.max(1);
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }
}

/// Rows produced for the list view.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    /// One page of the browse endpoint.
    Browse {
        page: u32,
        total_pages: u32,
        outcome: AggregateOutcome,
    },
    /// Matches for a search query.
    Search {
        query: String,
        characters: Vec<CharacterSummary>,
    },
}

impl Listing {
    pub fn characters(&self) -> &[CharacterSummary] {
        match self {
            Self::Browse { outcome, .. } => &outcome.characters,
            Self::Search { characters, .. } => characters,
        }
    }

    /// References on a browse page that could not be resolved.
    pub fn failed_count(&self) -> usize {
        match self {
            Self::Browse { outcome, .. } => outcome.failed.len(),
            Self::Search { .. } => 0,
        }
    }

    /// Text shown in place of the table when there are no rows.
    pub fn empty_message(&self) -> Option<String> {
        if !self.characters().is_empty() {
            return None;
        }

        match self {
            Self::Browse { page, .. } => Some(format!("No characters on page {}.", page)),
            Self::Search { query, .. } => Some(format!("No characters match \"{}\".", query)),
        }
    }
}

pub struct BrowseService<'a, F> {
    client: &'a SwapiClient<F>,
    page_size: u32,
    max_in_flight: usize,
}

impl<'a, F: Fetch> BrowseService<'a, F> {
    /// Creates a new instance of [`BrowseService`]
    pub fn new(client: &'a SwapiClient<F>, page_size: u32, max_in_flight: usize) -> Self {
        Self {
            client,
            page_size: page_size.max(1),
            max_in_flight,
        }
    }

    /// Load whatever the list view should show for `page` and `query`.
    ///
    /// A non-empty query searches and ignores `page`; an empty query browses.
    pub async fn load(&self, page: u32, query: &str) -> Result<Listing, Error> {
        if query.is_empty() {
            self.browse(page).await
        } else {
            self.search(query).await
        }
    }

    /// One page of characters with details aggregated.
    ///
    /// A failed listing request is an error; failed detail requests only drop
    /// their rows and are reported in the outcome.
    pub async fn browse(&self, page: u32) -> Result<Listing, Error> {
        let page = page.max(1);
        let envelope = self.client.people_page(page, self.page_size).await?;

        let outcome = DetailAggregator::new(self.client, self.max_in_flight)
            .aggregate(&envelope.results)
            .await;

        Ok(Listing::Browse {
            page,
            total_pages: total_pages(envelope.total_records, self.page_size),
            outcome,
        })
    }

    /// Characters matching `query` by name.
    pub async fn search(&self, query: &str) -> Result<Listing, Error> {
        if query.eq_ignore_ascii_case(FAILURE_TRIGGER_QUERY) {
            tracing::warn!("Search query {:?} triggers a failure", query);
            return Err(ApiError::Triggered.into());
        }

        let characters = self
            .client
            .search_people(query)
            .await?
            .into_iter()
            .map(CharacterSummary::from)
            .collect();

        Ok(Listing::Search {
            query: query.to_string(),
            characters,
        })
    }
}
