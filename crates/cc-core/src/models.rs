//! # Domain Models
//!
//! These structs mirror the JSON records exchanged with the CampusCommons
//! backend. They are passed through verbatim; the client enforces nothing
//! beyond their shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display format for every `created_at` shown in a page.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// A forum member, identified by a bare username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// A forum thread container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub title: String,
    /// The backend omits this field entirely when it is empty.
    #[serde(default)]
    pub description: String,
    /// User id of the author
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

/// A message within a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub topic_id: i64,
    pub title: String,
    pub body: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

/// A reply attached to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub body: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

impl Topic {
    pub fn created_display(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl Post {
    pub fn created_display(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl Comment {
    pub fn created_display(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

/// Body of `POST /topics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTopic {
    pub title: String,
    pub description: String,
    pub created_by: i64,
}

/// Body of `PUT /topics/:id`. The author never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicUpdate {
    pub title: String,
    pub description: String,
}

/// Body of `POST /topics/:id/posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub created_by: i64,
}

/// Body of `PUT /posts/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostUpdate {
    pub title: String,
    pub body: String,
}

/// Body of `POST /posts/:id/comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub body: String,
    pub created_by: i64,
}
