//! # Auth slice
//!
//! Holds the signed-in user and the state of the last login/register request.
//! The UI drives it through [`AuthSlice::begin`] before the request and
//! [`AuthSlice::settle`] once the response arrives. `begin` returns the session
//! number the response must match; [`AuthSlice::logout`] starts a new session so
//! a login answered after logout is dropped.
//!
//! Only two HTTP statuses have a dedicated message: `401` (bad credentials) and
//! `500` (the API's answer to registering an email twice). Anything else leaves
//! the slice rejected without a [`Notice`].

use crate::models::UserInfo;
use crate::notice::Notice;
use crate::status::{AsyncStatus, RequestFailure};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthSlice {
    pub user: Option<UserInfo>,
    pub status: AsyncStatus,
    pub error: Option<RequestFailure>,
    /// Bumped by [`AuthSlice::logout`].
    pub session: u64,
}

impl AuthSlice {
    pub fn begin(&mut self) -> u64 {
        self.status = AsyncStatus::Pending;
        self.error = None;
        self.session
    }

    pub fn fulfil(&mut self, user: UserInfo) {
        self.status = AsyncStatus::Fulfilled;
        self.user = Some(user);
        self.error = None;
    }

    /// Record a failed request. A previously signed-in user is kept.
    pub fn reject(&mut self, failure: RequestFailure) {
        self.status = AsyncStatus::Rejected;
        self.error = Some(failure);
    }

    /// Returns `false` when the result belongs to a session that was logged out.
    pub fn settle(&mut self, session: u64, result: Result<UserInfo, RequestFailure>) -> bool {
        if session != self.session {
            return false;
        }
        match result {
            Ok(user) => self.fulfil(user),
            Err(failure) => self.reject(failure),
        }
        true
    }

    pub fn logout(&mut self) {
        *self = Self {
            session: self.session.wrapping_add(1),
            ..Self::default()
        };
    }

    /// A user with a name is present. Navigation to the task list keys off this.
    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().is_some_and(|u| !u.name.is_empty())
    }

    pub fn token(&self) -> Option<String> {
        self.user.as_ref().and_then(|u| u.token.clone())
    }

    pub fn notice(&self) -> Option<Notice> {
        if self.status.is_pending() {
            return Some(Notice::loading(
                "Authentication in progress",
                "Please wait while you are being authenticated.",
            ));
        }
        match self.error.as_ref().and_then(|e| e.status) {
            Some(401) => Some(Notice::error(
                "Authentication failed",
                "Please check your email or password.",
            )),
            Some(500) => Some(Notice::error(
                "Registration failed",
                "Email address is already registered.",
            )),
            _ => None,
        }
    }
}
