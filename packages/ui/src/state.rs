//! Application state context and hooks for the UI.

use api::ApiClient;
use dioxus::prelude::*;
use store::{AuthSlice, ClientConfig, TasksSlice};

/// Get the auth slice.
/// Returns a signal that updates on every login/register/logout transition.
pub fn use_auth() -> Signal<AuthSlice> {
    use_context::<Signal<AuthSlice>>()
}

/// Get the tasks slice.
pub fn use_tasks() -> Signal<TasksSlice> {
    use_context::<Signal<TasksSlice>>()
}

/// Get the unauthenticated API client. Task calls add the user's token through
/// [`ApiClient::with_token`].
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Provider component that owns the slices and the API client.
/// Wrap the router with this component.
#[component]
pub fn StoreProvider(config: ClientConfig, children: Element) -> Element {
    let client_config = config.clone();
    use_context_provider(|| Signal::new(AuthSlice::default()));
    use_context_provider(|| Signal::new(TasksSlice::default()));
    use_context_provider(move || {
        tracing::info!("Using task API at {}", client_config.api.base_url);
        ApiClient::from_config(&client_config)
    });
    use_context_provider(move || config);

    rsx! {
        {children}
    }
}
