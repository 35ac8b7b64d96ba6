use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaStar;
use dioxus_free_icons::Icon;

use crate::client::components::FailureBoundary;
use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                Link {
                    to: Route::CharacterList {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl",
                            "Holocron"
                        }
                        p { class: "text-xs",
                            "v0.1.0"
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                Link {
                    to: Route::Favourites {},
                    class: "btn btn-ghost flex gap-2",
                    Icon {
                        width: 18,
                        height: 18,
                        icon: FaStar
                    }
                    p {
                        "Favourites"
                    }
                }
            }
        }

        FailureBoundary {
            Outlet::<Route> {}
        }
    }
}
