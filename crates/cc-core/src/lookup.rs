//! Single-topic lookup.
//!
//! The backend has no `GET /topics/:id`, so a topic is found by listing all
//! of them and scanning for the id.

use crate::error::{AppError, Result};
use crate::models::Topic;
use crate::traits::ForumApi;

/// Fetches the full topic list and returns the one matching `id`.
pub async fn find_topic(api: &dyn ForumApi, id: i64) -> Result<Topic> {
    api.list_topics()
        .await?
        .into_iter()
        .find(|topic| topic.id == id)
        .ok_or_else(|| AppError::NotFound("Topic".into()))
}
