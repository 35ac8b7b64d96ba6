use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaStar;
use dioxus_free_icons::Icon;

use holocron::{model::CharacterDetail, service::CharacterDetailService, util::RequestSequence};

use crate::client::{
    app::AppContext,
    components::{use_failure_reporter, BackButton, Page},
    store::favorites::Favorites,
};

#[component]
pub fn CharacterDetails(id: String) -> Element {
    let app = use_context::<AppContext>();
    let favorites = use_context::<Favorites>();
    let failure = use_failure_reporter();

    let mut detail = use_signal(|| None::<CharacterDetail>);
    let sequence = use_hook(RequestSequence::new);

    use_effect(use_reactive!(|id| {
        let token = sequence.begin();
        let sequence = sequence.clone();
        let app = app.clone();

        detail.set(None);

        spawn(async move {
            let result = CharacterDetailService::new(&app.client, app.config.max_in_flight)
                .get_character(&id)
                .await;

            if !sequence.is_current(token) {
                return;
            }

            match result {
                Ok(character) => detail.set(Some(character)),
                Err(e) => failure.report(e),
            }
        });
    }));

    let is_favorite = favorites.is_favorite(&id);
    let toggle_favorite = {
        let id = id.clone();
        move |_: MouseEvent| {
            let Some(record) = detail.read().as_ref().map(|d| d.to_favorite(&id)) else {
                return;
            };

            if let Err(e) = favorites.toggle(record) {
                failure.report(e);
            }
        }
    };

    rsx!(
        Title { "Character Details | Holocron" }
        Page {
            BackButton { label: "Back to Character List" }
            h1 { class: "text-2xl font-bold",
                "Character Details"
            }
            if let Some(character) = detail.read().clone() {
                div { class: "card shadow-sm w-full",
                    div { class: "card-body flex flex-col gap-2",
                        DetailField { label: "Name", value: character.name.clone() }
                        DetailField { label: "Height", value: character.height.clone() }
                        DetailField { label: "Hair Color", value: character.hair_color.clone() }
                        DetailField { label: "Eye Color", value: character.eye_color.clone() }
                        DetailField { label: "Gender", value: character.gender.clone() }
                        DetailField { label: "Home Planet", value: character.homeworld.clone() }
                        NameList {
                            title: "Films",
                            names: character.films.clone(),
                            empty: "No films available"
                        }
                        NameList {
                            title: "Starships",
                            names: character.starships.clone(),
                            empty: "No starships available"
                        }
                        NameList {
                            title: "Vehicles",
                            names: character.vehicles.clone(),
                            empty: "No vehicles available"
                        }
                        div { class: "card-actions",
                            button {
                                class: if is_favorite { "btn btn-error flex gap-2" } else { "btn btn-success flex gap-2" },
                                onclick: toggle_favorite,
                                Icon {
                                    width: 16,
                                    height: 16,
                                    icon: FaStar
                                }
                                if is_favorite {
                                    "Remove from Favorites"
                                } else {
                                    "Add to Favorites"
                                }
                            }
                        }
                    }
                }
            } else {
                p {
                    "Loading character details..."
                }
            }
        }
    )
}

#[component]
fn DetailField(label: &'static str, value: String) -> Element {
    rsx!(
        p {
            strong { "{label}: " }
            "{value}"
        }
    )
}

#[component]
fn NameList(title: &'static str, names: Vec<String>, empty: &'static str) -> Element {
    rsx!(
        div { class: "flex flex-col gap-1",
            h2 { class: "text-lg font-semibold",
                "{title}"
            }
            if names.is_empty() {
                p { "{empty}" }
            } else {
                ul { class: "list-disc pl-6",
                    for name in names.iter() {
                        li { "{name}" }
                    }
                }
            }
        }
    )
}
