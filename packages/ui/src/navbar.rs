use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }
        header {
            class: "navbar",
            {children}
        }
    }
}
