//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub use components::COMPONENTS_CSS;

mod state;
pub use state::{use_api, use_auth, use_config, use_tasks, StoreProvider};

pub mod actions;
pub use actions::{add_new_task, fetch_tasks, login_user, logout_user, register_user};

mod navbar;
pub use navbar::Navbar;

mod task_card;
pub use task_card::TaskCard;
