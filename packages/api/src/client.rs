//! # REST client for the task API
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] with the API base URL and the
//! optional bearer token of the signed-in user. Each public method maps to one
//! endpoint:
//!
//! | Method | HTTP | Path |
//! |--------|------|------|
//! | [`ApiClient::login`] | `POST` | `/api/users/login` |
//! | [`ApiClient::register`] | `POST` | `/api/users/register` |
//! | [`ApiClient::list_tasks`] | `GET` | `/api/tasks` |
//! | [`ApiClient::create_task`] | `POST` | `/api/tasks` |
//!
//! Any non-2xx answer becomes [`ApiError::Status`]. There are no retries and no
//! timeouts beyond what `reqwest` does by default.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use store::{ClientConfig, Credentials, NewTask, Registration, Task, UserInfo};

use crate::error::ApiError;

pub const LOGIN_PATH: &str = "/api/users/login";
pub const REGISTER_PATH: &str = "/api/users/register";
pub const TASKS_PATH: &str = "/api/tasks";

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api.base_url.as_str())
    }

    /// Copy of this client that authenticates task requests with `token`.
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            token,
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Request to {} failed with {}", response.url(), status);
            return Err(ApiError::Status(status.as_u16()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Sign in with email and password.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserInfo, ApiError> {
        tracing::debug!("Logging in");
        let request = self.http.post(self.url(LOGIN_PATH)).json(credentials);
        self.send(request).await
    }

    /// Create an account. The API signs the new user in on success.
    pub async fn register(&self, registration: &Registration) -> Result<UserInfo, ApiError> {
        tracing::debug!("Registering a new account");
        let request = self.http.post(self.url(REGISTER_PATH)).json(registration);
        self.send(request).await
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let request = self.authorized(self.http.get(self.url(TASKS_PATH)));
        self.send(request).await
    }

    pub async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        let request = self.authorized(self.http.post(self.url(TASKS_PATH)).json(task));
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials() -> Credentials {
        Credentials {
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_returns_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .and(body_json(json!({"email": "ada@example.com", "password": "secret1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "token": "abc"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let user = client.login(&credentials()).await.unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.token.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_login_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let err = client.login(&credentials()).await.unwrap_err();
        assert_eq!(err, ApiError::Status(401));
        assert_eq!(err.to_string(), "Request failed with status code 401");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(REGISTER_PATH))
            .and(body_json(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": "secret1"
            })))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let registration = Registration {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
        };
        let err = client.register(&registration).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_list_tasks_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TASKS_PATH))
            .and(header("authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"_id": "1", "title": "Buy milk"},
                {"_id": "2", "title": "Ship release", "description": "v1.2", "completed": true}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri()).with_token(Some("abc".to_string()));
        let tasks = client.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, "1");
        assert_eq!(tasks[1].description, "v1.2");
        assert!(tasks[1].completed);
    }

    #[tokio::test]
    async fn test_list_tasks_without_token_has_no_auth_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TASKS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = ApiClient::new(format!("{}/", server.uri()));
        assert!(client.list_tasks().await.unwrap().is_empty());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_create_task() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TASKS_PATH))
            .and(body_json(json!({"title": "Write report", "description": ""})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "_id": "9",
                "title": "Write report",
                "createdAt": "2023-04-02T10:15:00Z"
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri()).with_token(Some("abc".to_string()));
        let task = client
            .create_task(&NewTask {
                title: "Write report".to_string(),
                description: String::new(),
            })
            .await
            .unwrap();
        assert_eq!(task.id, "9");
        assert_eq!(task.created_at.as_deref(), Some("2023-04-02T10:15:00Z"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TASKS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let err = client.list_tasks().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_from_config_trims_trailing_slash() {
        let config = ClientConfig::new("https://tasks.example.com/");
        let client = ApiClient::from_config(&config);
        assert_eq!(client.base_url(), "https://tasks.example.com");
        assert_eq!(client.url(TASKS_PATH), "https://tasks.example.com/api/tasks");
    }
}
