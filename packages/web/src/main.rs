use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use store::ClientConfig;
use ui::StoreProvider;
use views::{AppLayout, Home, NotFound, TaskForm, TaskList};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/list")]
        TaskList {},
        #[route("/listnew")]
        TaskForm {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

const CONFIG_TOML: &str = include_str!("../taskit.toml");

fn main() {
    dioxus::logger::init(Level::INFO).expect("Failed to initialize logger");
    dioxus::launch(App);
}

/// Bundled `taskit.toml` with the build-time `TASKIT_API_URL` override applied.
fn load_config() -> ClientConfig {
    let config = match ClientConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}, using defaults: {}", ClientConfig::filename(), e);
            ClientConfig::default()
        }
    };
    config.with_base_url_override(option_env!("TASKIT_API_URL"))
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Stylesheet { href: MAIN_CSS }
        document::Stylesheet { href: ui::COMPONENTS_CSS }

        StoreProvider {
            config,
            Router::<Route> {}
        }
    }
}
