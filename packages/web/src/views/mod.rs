use dioxus::prelude::*;

use crate::Route;

mod layout;
pub use layout::AppLayout;

mod header;
pub use header::Header;

mod home;
pub use home::Home;

mod task_list;
pub use task_list::TaskList;

mod task_form;
pub use task_form::TaskForm;

mod not_found;
pub use not_found::NotFound;

/// Send visitors without a session back to the authentication form.
pub(crate) fn use_require_auth() {
    let auth = ui::use_auth();
    let navigator = use_navigator();
    use_effect(move || {
        if !auth.read().is_authenticated() {
            tracing::info!("No session, redirecting to login");
            navigator.replace(Route::Home {});
        }
    });
}
