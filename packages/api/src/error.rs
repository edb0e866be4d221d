//! Errors returned by [`crate::ApiClient`].

use store::RequestFailure;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("Request failed with status code {0}")]
    Status(u16),
    /// The request never got a response.
    #[error("Network error: {0}")]
    Network(String),
    /// The response body was not the expected JSON.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            ApiError::Status(status.as_u16())
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<ApiError> for RequestFailure {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Status(code) => RequestFailure::http(code),
            other => RequestFailure::other(other.to_string()),
        }
    }
}
