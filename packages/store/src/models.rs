//! # Domain models for users and tasks
//!
//! Defines the payloads sent to the task API and the records it returns.
//! Everything here is `Serialize + Deserialize` so the `api` crate can post and
//! decode them as JSON directly.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Credentials`] | Email and password submitted from the login form. |
//! | [`Registration`] | Name, email and password submitted from the register form. |
//! | [`UserInfo`] | The signed-in user returned by login/register. Held in the auth slice until logout or reload. |
//! | [`Task`] | A task as listed by the API. Missing optional fields fall back to defaults. |
//! | [`NewTask`] | The body posted when creating a task. |

use serde::{Deserialize, Serialize};

/// Login payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// The authenticated user as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Bearer token for task requests, when the API issues one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is empty.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// A task stored by the remote API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Server identifier. Document stores send it as `_id`.
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    /// Creation timestamp as sent by the server, e.g. "2023-04-02T10:15:00Z"
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body for creating a task.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
}
