use dioxus::prelude::*;

use holocron::model::CharacterSummary;

use crate::client::router::Route;

/// Browse or search results; clicking a row opens the character's details.
#[component]
pub fn CharacterTable(characters: Vec<CharacterSummary>) -> Element {
    let navigator = use_navigator();

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { "Name" }
                        th { "Gender" }
                        th { "Home Planet" }
                    }
                }
                tbody {
                    {characters.iter().map(|character| {
                        let id = character.uid().map(str::to_string);

                        rsx! {
                            tr {
                                key: "{character.url}",
                                class: "hover cursor-pointer",
                                onclick: move |_| {
                                    if let Some(id) = id.clone() {
                                        navigator.push(Route::CharacterDetails { id });
                                    }
                                },
                                td { "{character.name}" }
                                td { "{character.gender}" }
                                td { "{character.homeworld}" }
                            }
                        }
                    })}
                }
            }
        }
    )
}
