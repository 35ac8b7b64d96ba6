use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowLeft;
use dioxus_free_icons::Icon;

/// Return to the previous route.
#[component]
pub fn BackButton(label: &'static str) -> Element {
    let navigator = use_navigator();

    rsx!(
        button {
            class: "btn btn-outline w-fit flex gap-2",
            onclick: move |_| navigator.go_back(),
            Icon {
                width: 16,
                height: 16,
                icon: FaArrowLeft
            }
            p {
                "{label}"
            }
        }
    )
}
