use dioxus::prelude::*;

/// Centered column with a maximum width.
#[component]
pub fn Container(#[props(default = "lg".to_string())] size: String, children: Element) -> Element {
    rsx! {
        div {
            class: "container container-{size}",
            {children}
        }
    }
}

/// Bordered surface for forms and cards.
#[component]
pub fn Paper(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "paper {class}",
            {children}
        }
    }
}
