//! # Forms
//!
//! Raw form-field state as submitted by the browser, and its validation into
//! backend payloads. The only sanitization performed is trimming whitespace.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, Result};
use crate::models::{NewComment, NewPost, NewTopic, PostUpdate, TopicUpdate};
use crate::session::Session;

/// Parses an id taken from a URL path. `kind` names it in the error
/// ("Invalid topic ID").
pub fn parse_id(raw: &str, kind: &str) -> Result<i64> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::validation(format!("Invalid {kind} ID"))),
    }
}

fn required(value: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(message));
    }
    Ok(trimmed.to_string())
}

fn logged_in<'a>(session: Option<&'a Session>, action: &str) -> Result<&'a Session> {
    session.ok_or_else(|| AppError::unauthenticated(format!("You must be logged in to {action}.")))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
}

impl LoginForm {
    /// Returns the trimmed username.
    pub fn validate(&self) -> Result<String> {
        required(&self.username, "Username is required.")
    }
}

/// Shared by the create and edit topic pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl TopicForm {
    pub fn to_new_topic(&self, session: Option<&Session>) -> Result<NewTopic> {
        let author = logged_in(session, "create a topic")?;
        Ok(NewTopic {
            title: required(&self.title, "Title is required.")?,
            description: self.description.trim().to_string(),
            created_by: author.user_id(),
        })
    }

    pub fn to_update(&self) -> Result<TopicUpdate> {
        Ok(TopicUpdate {
            title: required(&self.title, "Title is required.")?,
            description: self.description.trim().to_string(),
        })
    }
}

/// Shared by the create and edit post pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl PostForm {
    pub fn to_new_post(&self, session: Option<&Session>) -> Result<NewPost> {
        let author = logged_in(session, "create a post")?;
        Ok(NewPost {
            title: required(&self.title, "Title is required.")?,
            body: required(&self.body, "Post body is required.")?,
            created_by: author.user_id(),
        })
    }

    pub fn to_update(&self) -> Result<PostUpdate> {
        Ok(PostUpdate {
            title: required(&self.title, "Title is required.")?,
            body: required(&self.body, "Post body is required.")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub body: String,
}

impl CommentForm {
    pub fn to_new_comment(&self, session: Option<&Session>) -> Result<NewComment> {
        let author = logged_in(session, "comment")?;
        Ok(NewComment {
            body: required(&self.body, "Comment body is required.")?,
            created_by: author.user_id(),
        })
    }
}

/// The delete-post form carries the parent topic so the page knows where
/// to go afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePostForm {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub topic_id: Option<i64>,
}

/// An empty `topic_id=` field means "unknown", not a malformed number.
fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
