use dioxus::prelude::*;
use ui::components::Container;

use super::Header;
use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        div {
            class: "app",
            Header {}
            Container {
                Outlet::<Route> {}
            }
        }
    }
}
