//! Request lifecycle shared by every slice.

use serde::{Deserialize, Serialize};

/// Where an asynchronous action currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsyncStatus {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

impl AsyncStatus {
    pub fn is_pending(self) -> bool {
        self == AsyncStatus::Pending
    }

    /// Fulfilled or rejected.
    pub fn is_settled(self) -> bool {
        matches!(self, AsyncStatus::Fulfilled | AsyncStatus::Rejected)
    }
}

/// The error a rejected action leaves behind in its slice.
///
/// `message` is the human readable form of the failure. For HTTP errors it reads
/// `"Request failed with status code <n>"` and `status` carries `<n>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFailure {
    pub status: Option<u16>,
    pub message: String,
}

impl RequestFailure {
    /// Failure for a non-success HTTP response.
    pub fn http(status: u16) -> Self {
        Self {
            status: Some(status),
            message: format!("Request failed with status code {status}"),
        }
    }

    /// Failure that never produced a response (network, decoding).
    pub fn other(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_failure_message() {
        let failure = RequestFailure::http(401);
        assert_eq!(failure.status, Some(401));
        assert_eq!(failure.to_string(), "Request failed with status code 401");
    }

    #[test]
    fn test_settled() {
        assert!(!AsyncStatus::Idle.is_settled());
        assert!(!AsyncStatus::Pending.is_settled());
        assert!(AsyncStatus::Fulfilled.is_settled());
        assert!(AsyncStatus::Rejected.is_settled());
        assert!(AsyncStatus::Pending.is_pending());
    }
}
