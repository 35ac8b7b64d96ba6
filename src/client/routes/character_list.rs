use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use holocron::{
    service::{BrowseService, Listing, PageState},
    util::RequestSequence,
};

use crate::client::{
    app::AppContext,
    components::{use_failure_reporter, CharacterTable, Page, Pagination},
    hooks::use_debounce,
};

#[component]
pub fn CharacterList() -> Element {
    let app = use_context::<AppContext>();
    let failure = use_failure_reporter();

    let mut query = use_signal(String::new);
    let debounced_query = use_debounce(query, app.config.search_debounce());
    let mut page_state = use_signal(PageState::default);
    let mut listing = use_signal(|| None::<Listing>);
    let mut loading = use_signal(|| false);
    let sequence = use_hook(RequestSequence::new);

    use_effect(move || {
        let query = debounced_query.read().clone();
        if page_state.peek().search_query != query {
            page_state.write().set_search_query(query);
        }
    });

    // Only page and query trigger a load; page count updates do not.
    let request = use_memo(move || {
        let state = page_state.read();
        (state.current_page, state.search_query.clone())
    });

    use_effect({
        let sequence = sequence.clone();
        move || {
            let (page, query) = request.read().clone();
            let token = sequence.begin();
            let sequence = sequence.clone();
            let app = app.clone();

            loading.set(true);

            spawn(async move {
                let service = BrowseService::new(
                    &app.client,
                    app.config.page_size,
                    app.config.max_in_flight,
                );
                let result = service.load(page, &query).await;

                if !sequence.is_current(token) {
                    tracing::debug!("Discarding superseded load of page {} ({:?})", page, query);
                    return;
                }

                loading.set(false);

                match result {
                    Ok(next) => {
                        if let Listing::Browse { total_pages, .. } = &next {
                            page_state.write().set_total_pages(*total_pages);
                        }
                        listing.set(Some(next));
                    }
                    Err(e) => failure.report(e),
                }
            });
        }
    });

    use_drop(move || sequence.invalidate());

    let state = page_state.read().clone();
    let current = listing.read().clone();
    let failed_count = current.as_ref().map_or(0, Listing::failed_count);

    rsx!(
        Title { "Star Wars Characters | Holocron" }
        Page {
            h1 { class: "text-2xl font-bold",
                "Star Wars Characters"
            }
            input {
                class: "input input-bordered w-full",
                r#type: "text",
                placeholder: "Search by name",
                value: "{query}",
                oninput: move |event| {
                    query.set(event.value());
                    page_state.write().current_page = 1;
                },
            }
            if loading() {
                p { class: "text-center",
                    "Loading characters..."
                }
            } else if let Some(current) = current {
                if failed_count > 0 {
                    div { class: "alert alert-warning",
                        "{failed_count} characters on this page could not be loaded."
                    }
                }
                if let Some(message) = current.empty_message() {
                    p { class: "text-center",
                        "{message}"
                    }
                } else {
                    CharacterTable { characters: current.characters().to_vec() }
                }
            }
            if state.shows_pagination() && query.read().is_empty() {
                Pagination { page_state }
            }
        }
    )
}
