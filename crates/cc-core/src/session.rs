//! # Session
//!
//! The logged-in user is kept client-side as a JSON blob
//! (`{"id":1,"username":"alice"}`), base64url-encoded so it survives as a
//! cookie value. There is no expiry, refresh or server-side validation.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::models::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    pub user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user_id(&self) -> i64 {
        self.user.id
    }

    pub fn username(&self) -> &str {
        &self.user.username
    }

    /// Serializes the session into a cookie-safe string.
    pub fn encode(&self) -> String {
        // Serializing two plain fields cannot fail.
        let json = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    /// Reads a session back. Anything unreadable, including a JSON `null`,
    /// means "not logged in" rather than an error.
    pub fn decode(raw: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(raw.trim()).ok()?;
        serde_json::from_slice::<Option<Session>>(&bytes).ok().flatten()
    }
}
