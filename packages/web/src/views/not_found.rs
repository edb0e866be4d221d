use dioxus::prelude::*;
use ui::components::Paper;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Paper {
            h2 { "Page not found" }
            p { class: "dimmed", "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back to start" }
        }
    }
}
