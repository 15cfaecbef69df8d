//! Authenticated session context
//!
//! The identity provider (external) issues and refreshes bearer tokens; the
//! engine only carries one. The session is passed explicitly to every
//! backend call so evaluations stay a pure function of their inputs, with no
//! ambient global auth state.

use chrono::{DateTime, Utc};
use std::fmt;

/// Bearer-token session for backend calls
#[derive(Clone, PartialEq)]
pub struct Session {
    /// Portal user on whose behalf the engine acts
    pub user_id: String,
    access_token: String,
    /// None when the caller did not supply an expiry claim
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Token value for the Authorization header
    pub fn bearer(&self) -> &str {
        &self.access_token
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now >= expires_at,
            None => false,
        }
    }
}

// Keep the token out of logs
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("access_token", &"***")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
