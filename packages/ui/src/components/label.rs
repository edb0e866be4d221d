use dioxus::prelude::*;
use dioxus_primitives::label;

#[component]
pub fn Label(html_for: String, #[props(default)] required: bool, children: Element) -> Element {
    rsx! {
        label::Label {
            class: "label",
            html_for,
            {children}
            if required {
                span { class: "label-required", " *" }
            }
        }
    }
}
