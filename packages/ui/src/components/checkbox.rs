use dioxus::prelude::*;
use dioxus_primitives::checkbox::{self, CheckboxState};
use dioxus_primitives::label;

use crate::Icon;
use crate::icons::FaCheck;

fn to_state(checked: bool) -> CheckboxState {
    if checked {
        CheckboxState::Checked
    } else {
        CheckboxState::Unchecked
    }
}

/// Indeterminate counts as unchecked.
fn is_checked(state: CheckboxState) -> bool {
    matches!(state, CheckboxState::Checked)
}

/// Controlled checkbox reporting its new value as a `bool`.
#[component]
pub fn Checkbox(id: String, label: String, checked: bool, onchange: EventHandler<bool>) -> Element {
    rsx! {
        div {
            class: "checkbox",
            checkbox::Checkbox {
                id: "{id}",
                class: "checkbox-box",
                name: id.clone(),
                checked: Some(to_state(checked)),
                on_checked_change: move |next: CheckboxState| onchange.call(is_checked(next)),
                checkbox::CheckboxIndicator {
                    class: "checkbox-indicator",
                    Icon { icon: FaCheck, width: 10, height: 10 }
                }
            }
            label::Label {
                class: "checkbox-label",
                html_for: id.clone(),
                "{label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_mapping() {
        assert!(matches!(to_state(true), CheckboxState::Checked));
        assert!(matches!(to_state(false), CheckboxState::Unchecked));
        assert!(is_checked(to_state(true)));
        assert!(!is_checked(to_state(false)));
        assert!(!is_checked(CheckboxState::Indeterminate));
    }
}
