//! # cc-api-http
//! campus-commons/crates/cc-plugins/cc-api-http/src/lib.rs
//! reqwest implementation of `ForumApi` against the CampusCommons REST backend.
//! Owns transport details only: JSON bodies, status mapping and decoding.

use std::time::Duration;

use async_trait::async_trait;
use cc_core::error::{AppError, Result};
use cc_core::models::{
    Comment, LoginRequest, NewComment, NewPost, NewTopic, Post, PostUpdate, Topic, TopicUpdate,
    User,
};
use cc_core::traits::ForumApi;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct HttpForumApi {
    client: Client,
    /// Backend origin without trailing slash (e.g. "http://localhost:8080")
    base_url: String,
}

impl HttpForumApi {
    /// Builds a client whose every request gives up after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> std::result::Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    fn with_json<B: Serialize>(&self, method: Method, path: &str, body: &B) -> RequestBuilder {
        self.request(method, path).json(body)
    }

    /// Sends the request and decodes a JSON body.
    async fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder, context: &str) -> Result<T> {
        let body = self.send(req, context).await?;
        serde_json::from_slice(&body).map_err(|e| {
            log::warn!("{context}: undecodable body: {e}");
            AppError::Decode {
                context: context.to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Sends the request; any 2xx counts as success and the body is returned raw.
    async fn send(&self, req: RequestBuilder, context: &str) -> Result<Vec<u8>> {
        let response = req.send().await.map_err(|e| transport_error(context, e))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(context, e))?;

        if !status.is_success() {
            return Err(status_error(context, status, &body));
        }
        Ok(body.to_vec())
    }

    /// Decodes a list endpoint. Some backend versions answer `null` for an
    /// empty collection.
    async fn fetch_list<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        context: &str,
    ) -> Result<Vec<T>> {
        let list: Option<Vec<T>> = self.fetch(req, context).await?;
        Ok(list.unwrap_or_default())
    }
}

fn transport_error(context: &str, error: reqwest::Error) -> AppError {
    log::warn!("{context}: {error}");
    AppError::Transport {
        context: context.to_string(),
        reason: error.to_string(),
    }
}

fn status_error(context: &str, status: StatusCode, body: &[u8]) -> AppError {
    let message = String::from_utf8_lossy(body).trim().to_string();
    log::warn!("{context}: backend answered {} {message}", status.as_u16());
    AppError::Backend {
        context: context.to_string(),
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl ForumApi for HttpForumApi {
    async fn login(&self, username: &str) -> Result<User> {
        let body = LoginRequest {
            username: username.to_string(),
        };
        self.fetch(self.with_json(Method::POST, "/login", &body), "Login failed")
            .await
    }

    async fn list_topics(&self) -> Result<Vec<Topic>> {
        self.fetch_list(self.request(Method::GET, "/topics"), "Failed to fetch topics")
            .await
    }

    async fn create_topic(&self, topic: NewTopic) -> Result<Topic> {
        self.fetch(
            self.with_json(Method::POST, "/topics", &topic),
            "Failed to create topic",
        )
        .await
    }

    async fn update_topic(&self, id: i64, update: TopicUpdate) -> Result<()> {
        self.send(
            self.with_json(Method::PUT, &format!("/topics/{id}"), &update),
            "Failed to update topic",
        )
        .await
        .map(drop)
    }

    async fn delete_topic(&self, id: i64) -> Result<()> {
        self.send(
            self.request(Method::DELETE, &format!("/topics/{id}")),
            "Failed to delete topic",
        )
        .await
        .map(drop)
    }

    async fn list_posts(&self, topic_id: i64) -> Result<Vec<Post>> {
        self.fetch_list(
            self.request(Method::GET, &format!("/topics/{topic_id}/posts")),
            "Failed to fetch posts",
        )
        .await
    }

    async fn create_post(&self, topic_id: i64, post: NewPost) -> Result<Post> {
        self.fetch(
            self.with_json(Method::POST, &format!("/topics/{topic_id}/posts"), &post),
            "Failed to create post",
        )
        .await
    }

    async fn get_post(&self, id: i64) -> Result<Post> {
        self.fetch(
            self.request(Method::GET, &format!("/posts/{id}")),
            "Failed to fetch post",
        )
        .await
    }

    async fn update_post(&self, id: i64, update: PostUpdate) -> Result<()> {
        self.send(
            self.with_json(Method::PUT, &format!("/posts/{id}"), &update),
            "Failed to update post",
        )
        .await
        .map(drop)
    }

    async fn delete_post(&self, id: i64) -> Result<()> {
        self.send(
            self.request(Method::DELETE, &format!("/posts/{id}")),
            "Failed to delete post",
        )
        .await
        .map(drop)
    }

    async fn list_comments(&self, post_id: i64) -> Result<Vec<Comment>> {
        self.fetch_list(
            self.request(Method::GET, &format!("/posts/{post_id}/comments")),
            "Failed to fetch comments",
        )
        .await
    }

    async fn create_comment(&self, post_id: i64, comment: NewComment) -> Result<Comment> {
        self.fetch(
            self.with_json(Method::POST, &format!("/posts/{post_id}/comments"), &comment),
            "Failed to add comment",
        )
        .await
    }

    async fn health(&self) -> Result<()> {
        self.send(self.request(Method::GET, "/health"), "Health check failed")
            .await
            .map(drop)
    }
}
