//! # Core Traits (Ports)
//!
//! The backend is external; any plugin that can speak to it must implement
//! `ForumApi` to be used by the binary.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    Comment, NewComment, NewPost, NewTopic, Post, PostUpdate, Topic, TopicUpdate, User,
};

/// One method per REST call the client makes.
///
/// # Developer Note
/// Implementations must not retry, cache or deduplicate. Every call is an
/// independent request whose failure is reported straight back to the page.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ForumApi: Send + Sync {
    // Session
    async fn login(&self, username: &str) -> Result<User>;

    // Topic Operations
    async fn list_topics(&self) -> Result<Vec<Topic>>;
    async fn create_topic(&self, topic: NewTopic) -> Result<Topic>;
    /// Any 2xx counts as saved; the response body is not read.
    async fn update_topic(&self, id: i64, update: TopicUpdate) -> Result<()>;
    /// Also removes every post and comment under the topic (backend side).
    async fn delete_topic(&self, id: i64) -> Result<()>;

    // Post Operations
    async fn list_posts(&self, topic_id: i64) -> Result<Vec<Post>>;
    async fn create_post(&self, topic_id: i64, post: NewPost) -> Result<Post>;
    async fn get_post(&self, id: i64) -> Result<Post>;
    async fn update_post(&self, id: i64, update: PostUpdate) -> Result<()>;
    async fn delete_post(&self, id: i64) -> Result<()>;

    // Comment Operations
    async fn list_comments(&self, post_id: i64) -> Result<Vec<Comment>>;
    async fn create_comment(&self, post_id: i64, comment: NewComment) -> Result<Comment>;

    /// Liveness probe against the backend's `/health` route.
    async fn health(&self) -> Result<()>;
}
