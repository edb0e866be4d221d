//! # Async actions
//!
//! Each action moves its slice to pending, performs one API call and settles
//! the slice as fulfilled or rejected with the outcome. Views spawn these from
//! event handlers:
//!
//! ```ignore
//! spawn(login_user(auth, api.clone(), form().credentials()));
//! ```
//!
//! A response that arrives after [`logout_user`] belongs to a finished session
//! and is discarded by the slice.

use api::ApiClient;
use dioxus::prelude::*;
use store::{
    AuthSlice, Credentials, NewTask, Registration, RequestFailure, TasksSlice,
};
use tracing::Level;

pub async fn login_user(mut auth: Signal<AuthSlice>, api: ApiClient, credentials: Credentials) {
    let session = auth.write().begin();
    let result = api.login(&credentials).await.map_err(RequestFailure::from);
    match &result {
        Ok(user) => tracing::info!("Logged in as {}", user.display_name()),
        Err(failure) => log_auth_failure("Login", failure),
    }
    if !auth.write().settle(session, result) {
        tracing::debug!("Discarded login response from a closed session");
    }
}

pub async fn register_user(
    mut auth: Signal<AuthSlice>,
    api: ApiClient,
    registration: Registration,
) {
    let session = auth.write().begin();
    let result = api
        .register(&registration)
        .await
        .map_err(RequestFailure::from);
    match &result {
        Ok(_) => tracing::info!("Registered a new account"),
        Err(failure) => log_auth_failure("Registration", failure),
    }
    if !auth.write().settle(session, result) {
        tracing::debug!("Discarded registration response from a closed session");
    }
}

pub async fn fetch_tasks(mut tasks: Signal<TasksSlice>, api: ApiClient, token: Option<String>) {
    let session = tasks.write().begin_fetch();
    let result = api
        .with_token(token)
        .list_tasks()
        .await
        .map_err(RequestFailure::from);
    match &result {
        Ok(list) => tracing::info!("Fetched {} tasks", list.len()),
        Err(failure) => tracing::error!("Failed to fetch tasks: {}", failure),
    }
    if !tasks.write().settle_fetch(session, result) {
        tracing::debug!("Discarded task list from a closed session");
    }
}

pub async fn add_new_task(
    mut tasks: Signal<TasksSlice>,
    api: ApiClient,
    token: Option<String>,
    new_task: NewTask,
) {
    let session = tasks.write().begin_create();
    let result = api
        .with_token(token)
        .create_task(&new_task)
        .await
        .map_err(RequestFailure::from);
    match &result {
        Ok(task) => tracing::info!("Created task {}", task.id),
        Err(failure) => tracing::error!("Failed to create task: {}", failure),
    }
    if !tasks.write().settle_create(session, result) {
        tracing::debug!("Discarded created task from a closed session");
    }
}

/// Drop the session: the user and every fetched task.
pub fn logout_user(mut auth: Signal<AuthSlice>, mut tasks: Signal<TasksSlice>) {
    auth.write().logout();
    tasks.write().clear();
    tracing::info!("Logged out");
}

/// 401 and 500 have their own notice; anything else reaches the user as nothing.
fn auth_failure_level(failure: &RequestFailure) -> Level {
    match failure.status {
        Some(401) | Some(500) => Level::INFO,
        _ => Level::WARN,
    }
}

fn log_auth_failure(action: &str, failure: &RequestFailure) {
    if auth_failure_level(failure) == Level::WARN {
        tracing::warn!("{action} failed without a user-facing message: {failure}");
    } else {
        tracing::info!("{action} rejected: {failure}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_auth_failures_are_warnings() {
        assert_eq!(auth_failure_level(&RequestFailure::http(401)), Level::INFO);
        assert_eq!(auth_failure_level(&RequestFailure::http(500)), Level::INFO);
        assert_eq!(auth_failure_level(&RequestFailure::http(404)), Level::WARN);
        assert_eq!(
            auth_failure_level(&RequestFailure::other("connection refused")),
            Level::WARN
        );
    }
}
