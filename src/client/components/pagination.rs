use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight};
use dioxus_free_icons::Icon;

use holocron::service::PageState;

#[component]
pub fn Pagination(page_state: Signal<PageState>) -> Element {
    let mut page_state = page_state;
    let state = page_state.read().clone();

    rsx!(
        div { class: "flex justify-center items-center gap-4",
            button {
                class: "btn btn-outline flex gap-2",
                disabled: !state.has_previous(),
                onclick: move |_| page_state.write().previous(),
                Icon {
                    width: 14,
                    height: 14,
                    icon: FaChevronLeft
                }
                "Previous"
            }
            span {
                "Page {state.current_page} of {state.total_pages}"
            }
            button {
                class: "btn btn-outline flex gap-2",
                disabled: !state.has_next(),
                onclick: move |_| page_state.write().next(),
                "Next"
                Icon {
                    width: 14,
                    height: 14,
                    icon: FaChevronRight
                }
            }
        }
    )
}
