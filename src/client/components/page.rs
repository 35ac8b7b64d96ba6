use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen p-4 {class}",
            div { class: "w-full max-w-[1080px] mx-auto flex flex-col gap-4",
                {children}
            }
        }
    )
}
