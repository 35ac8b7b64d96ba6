use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;

use crate::client::{
    components::{use_failure_reporter, BackButton, Page},
    store::favorites::Favorites,
};

const MISSING: &str = "N/A";

#[component]
pub fn Favourites() -> Element {
    let favorites = use_context::<Favorites>();
    let failure = use_failure_reporter();

    let records = favorites.records();

    rsx!(
        Title { "Favourites | Holocron" }
        Page {
            h1 { class: "text-2xl font-bold",
                "Favourites"
            }
            BackButton { label: "Back" }
            if records.is_empty() {
                p { class: "text-center",
                    "No favourites added yet!"
                }
            } else {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-md",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Height" }
                                th { "Gender" }
                                th { "Home Planet" }
                                th { "Action" }
                            }
                        }
                        tbody {
                            {records.into_iter().map(|record| {
                                let favorites = favorites.clone();
                                let id = record.id.clone();

                                rsx! {
                                    tr {
                                        key: "{record.id}",
                                        td { "{record.name}" }
                                        td { {record.height.as_deref().unwrap_or(MISSING)} }
                                        td { {record.gender.as_deref().unwrap_or(MISSING)} }
                                        td { {record.homeworld.as_deref().unwrap_or(MISSING)} }
                                        td {
                                            button {
                                                class: "btn btn-sm btn-outline btn-error flex gap-2",
                                                onclick: move |_| {
                                                    if let Err(e) = favorites.remove(&id) {
                                                        failure.report(e);
                                                    }
                                                },
                                                Icon {
                                                    width: 14,
                                                    height: 14,
                                                    icon: FaTrash
                                                }
                                                "Remove"
                                            }
                                        }
                                    }
                                }
                            })}
                        }
                    }
                }
            }
        }
    )
}
