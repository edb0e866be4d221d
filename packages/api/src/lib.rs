//! # API crate — HTTP client for the Taskit task service
//!
//! The web client never talks to a database; every piece of data comes from an
//! external REST API. This crate owns that conversation.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: login, register, list tasks, create task |
//! | [`error`] | [`ApiError`] and its conversion into the slices' [`store::RequestFailure`] |
//!
//! Request and response bodies are the [`store::models`] types, re-exported here
//! for convenience.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;

pub use store::{Credentials, NewTask, Registration, Task, UserInfo};
