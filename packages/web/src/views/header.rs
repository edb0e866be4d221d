use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::icons::{FaListCheck, FaRightFromBracket};
use ui::{logout_user, use_auth, use_tasks, Icon, Navbar};

use crate::Route;

#[component]
pub fn Header() -> Element {
    let auth = use_auth();
    let tasks = use_tasks();
    let navigator = use_navigator();
    let slice = auth();

    let on_logout = move |_: MouseEvent| {
        logout_user(auth, tasks);
        navigator.replace(Route::Home {});
    };

    rsx! {
        Navbar {
            Link {
                class: "navbar-brand",
                to: Route::Home {},
                Icon { icon: FaListCheck, width: 18, height: 18 }
                "Taskit"
            }

            nav {
                class: "navbar-links",
                if slice.is_authenticated() {
                    Link { to: Route::TaskList {}, active_class: "active", "Tasks" }
                    Link { to: Route::TaskForm {}, active_class: "active", "New task" }
                }
            }

            if let Some(user) = slice.user.clone() {
                div {
                    class: "navbar-user",
                    span { "{user.display_name()}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: on_logout,
                        Icon { icon: FaRightFromBracket, width: 12, height: 12 }
                        " Logout"
                    }
                }
            }
        }
    }
}
