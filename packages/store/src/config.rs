//! # Client configuration — `taskit.toml`
//!
//! Defines the TOML file bundled with the web client (filename:
//! [`ClientConfig::filename`] = `"taskit.toml"`). It tells the client where the
//! task API lives and how eagerly the task list is refreshed.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"   # scheme + host of the task API
//!
//! [tasks]
//! refresh_on_mount = false             # refetch every time the list view mounts
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. Builder helpers (`new`, `with_refresh_on_mount`), TOML (de)serialisation, and the canonical filename. |
//! | [`ApiConfig`] | API section — the `base_url`, default **`http://localhost:5000`**. |
//! | [`TasksConfig`] | Tasks section — `refresh_on_mount`, default **false**. |
//!
//! All structs derive or implement `Default` so a missing or empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `taskit.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub tasks: TasksConfig,
}

/// Where the task API is reachable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host, optionally with a path prefix. No trailing slash needed.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Task list behaviour.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Refetch the list every time the list view mounts instead of only once.
    #[serde(default)]
    pub refresh_on_mount: bool,
}

impl ClientConfig {
    /// Create a config pointing at the given API.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            tasks: TasksConfig::default(),
        }
    }

    /// Builder method to set `refresh_on_mount`.
    pub fn with_refresh_on_mount(mut self, refresh: bool) -> Self {
        self.tasks.refresh_on_mount = refresh;
        self
    }

    /// Replace the base URL when an override is present and non-empty.
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "taskit.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
