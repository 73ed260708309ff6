//! # cc-ui
//!
//! Askama page templates. Every struct here is one page; `current_user`
//! feeds the shared header in `base.html`.

use askama::Template;
use cc_core::forms::{PostForm, TopicForm};
use cc_core::models::{Comment, Post, Topic};

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate<'a> {
    pub current_user: Option<&'a str>,
    /// What the user typed, kept across a failed attempt
    pub username: &'a str,
    pub error: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "topics.html")]
pub struct TopicListTemplate<'a> {
    pub current_user: Option<&'a str>,
    pub topics: &'a [Topic],
}

#[derive(Template)]
#[template(path = "topic_detail.html")]
pub struct TopicDetailTemplate<'a> {
    pub current_user: Option<&'a str>,
    pub topic: &'a Topic,
    pub posts: &'a [Post],
}

/// Create and edit topic pages share this form.
#[derive(Template)]
#[template(path = "topic_form.html")]
pub struct TopicFormTemplate<'a> {
    pub current_user: Option<&'a str>,
    pub heading: &'a str,
    pub action: &'a str,
    pub submit_label: &'a str,
    pub busy_label: &'a str,
    pub cancel_url: &'a str,
    pub form: &'a TopicForm,
    pub error: Option<&'a str>,
}

/// Create and edit post pages share this form.
#[derive(Template)]
#[template(path = "post_form.html")]
pub struct PostFormTemplate<'a> {
    pub current_user: Option<&'a str>,
    pub heading: &'a str,
    pub action: &'a str,
    pub submit_label: &'a str,
    pub busy_label: &'a str,
    pub cancel_url: &'a str,
    pub form: &'a PostForm,
    pub error: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "post_detail.html")]
pub struct PostDetailTemplate<'a> {
    pub current_user: Option<&'a str>,
    pub post: &'a Post,
    pub comments: &'a [Comment],
    /// Unsent comment text, kept when adding it failed
    pub draft: &'a str,
    pub comment_error: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub current_user: Option<&'a str>,
    pub heading: &'a str,
    pub message: &'a str,
    /// Text the visitor typed but could not send, shown so it can be copied
    pub draft: Option<&'a str>,
}
