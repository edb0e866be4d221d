use dioxus::prelude::*;

use super::Label;

/// Labelled text input with an optional error line underneath.
#[component]
pub fn Input(
    id: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    #[props(default)] error: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        div {
            class: "field",
            Label { html_for: id.clone(), required, "{label}" }
            input {
                id: "{id}",
                class: if invalid { "input input-invalid" } else { "input" },
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                aria_invalid: invalid,
                oninput: move |evt| oninput.call(evt),
            }
            if let Some(err) = error {
                p { class: "field-error", "{err}" }
            }
        }
    }
}

/// Multi-line variant of [`Input`].
#[component]
pub fn TextArea(
    id: String,
    label: String,
    value: String,
    #[props(default)] placeholder: String,
    #[props(default = 4)] rows: u32,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            Label { html_for: id.clone(), "{label}" }
            textarea {
                id: "{id}",
                class: "input textarea",
                placeholder: "{placeholder}",
                rows: "{rows}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}
