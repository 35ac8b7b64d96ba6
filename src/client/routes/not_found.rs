use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | Holocron" }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                h1 { class: "text-2xl font-bold",
                    "Page not found"
                }
                p {
                    "Nothing lives at /{path}"
                }
                Link {
                    to: Route::CharacterList {},
                    class: "btn btn-primary",
                    "Back to Character List"
                }
            }
        }
    )
}
