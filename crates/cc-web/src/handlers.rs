//! # cc-web Handlers
//!
//! One handler per page. Each page fetches what it needs from the backend,
//! then renders either its view or the caught failure as a message.
//! Successful form submissions redirect; failed ones show the form again
//! with the entered values and the error.

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use cc_core::error::Result;
use cc_core::forms::{parse_id, CommentForm, DeletePostForm, LoginForm, PostForm, TopicForm};
use cc_core::lookup::find_topic;
use cc_core::models::{Comment, Post};
use cc_core::session::Session;
use cc_core::traits::ForumApi;
use cc_ui::{
    LoginTemplate, PostDetailTemplate, PostFormTemplate, TopicDetailTemplate, TopicFormTemplate,
    TopicListTemplate,
};

use crate::pages::{error_page_with_draft, form_status, redirect, render, respond};
use crate::session::{removal_cookie, session_cookie, CurrentUser};
use crate::AppState;

// ── Session ──────────────────────────────────────────────────────────────────

/// Renders the login form (also served at "/").
pub async fn login_page(user: CurrentUser) -> impl Responder {
    let page = LoginTemplate {
        current_user: user.name(),
        username: "",
        error: None,
    };
    respond(user.name(), render(StatusCode::OK, &page))
}

/// Logs in with a bare username and stores the returned user in the
/// session cookie.
pub async fn login(
    data: web::Data<AppState>,
    user: CurrentUser,
    form: web::Form<LoginForm>,
) -> impl Responder {
    // 1. Validation: blank usernames never reach the backend
    let outcome = match form.validate() {
        Ok(username) => data.api.login(&username).await,
        Err(err) => Err(err),
    };

    // 2. Session: keep the user blob client-side
    match outcome {
        Ok(logged_in) => {
            log::info!("user {} logged in as {}", logged_in.id, logged_in.username);
            let session = Session::new(logged_in);
            let mut response = redirect("/topics");
            if let Err(err) = response.add_cookie(&session_cookie(&data.session_cookie, &session)) {
                log::error!("failed to set session cookie: {err}");
            }
            response
        }
        Err(err) => {
            log::warn!("{err}");
            let message = err.to_string();
            let page = LoginTemplate {
                current_user: user.name(),
                username: &form.username,
                error: Some(&message),
            };
            respond(user.name(), render(form_status(&err), &page))
        }
    }
}

/// Forgets the session.
pub async fn logout(data: web::Data<AppState>) -> impl Responder {
    let mut response = redirect("/login");
    if let Err(err) = response.add_cookie(&removal_cookie(&data.session_cookie)) {
        log::error!("failed to clear session cookie: {err}");
    }
    response
}

// ── Topics ───────────────────────────────────────────────────────────────────

pub async fn list_topics(data: web::Data<AppState>, user: CurrentUser) -> impl Responder {
    let outcome = match data.api.list_topics().await {
        Ok(topics) => render(
            StatusCode::OK,
            &TopicListTemplate {
                current_user: user.name(),
                topics: &topics,
            },
        ),
        Err(err) => Err(err),
    };
    respond(user.name(), outcome)
}

fn topic_form_page(
    user: &CurrentUser,
    status: StatusCode,
    editing: Option<i64>,
    form: &TopicForm,
    error: Option<&str>,
) -> Result<HttpResponse> {
    let (heading, action, submit_label, busy_label, cancel_url) = match editing {
        Some(id) => (
            "Edit Topic",
            format!("/topics/{id}/edit"),
            "Save Changes",
            "Saving...",
            format!("/topics/{id}"),
        ),
        None => (
            "Create Topic",
            "/topics".to_string(),
            "Create",
            "Creating...",
            "/topics".to_string(),
        ),
    };
    render(
        status,
        &TopicFormTemplate {
            current_user: user.name(),
            heading,
            action: &action,
            submit_label,
            busy_label,
            cancel_url: &cancel_url,
            form,
            error,
        },
    )
}

pub async fn new_topic_page(user: CurrentUser) -> impl Responder {
    let outcome = topic_form_page(&user, StatusCode::OK, None, &TopicForm::default(), None);
    respond(user.name(), outcome)
}

pub async fn create_topic(
    data: web::Data<AppState>,
    user: CurrentUser,
    form: web::Form<TopicForm>,
) -> impl Responder {
    let outcome = match form.to_new_topic(user.session()) {
        Ok(topic) => data.api.create_topic(topic).await,
        Err(err) => Err(err),
    };
    match outcome {
        Ok(topic) => {
            log::info!("topic {} created by user {}", topic.id, topic.created_by);
            redirect("/topics")
        }
        Err(err) => {
            log::warn!("{err}");
            let message = err.to_string();
            let page = topic_form_page(&user, form_status(&err), None, &form, Some(&message));
            respond(user.name(), page)
        }
    }
}

async fn topic_detail_page(api: &dyn ForumApi, user: &CurrentUser, raw_id: &str) -> Result<HttpResponse> {
    let id = parse_id(raw_id, "topic")?;
    let topic = find_topic(api, id).await?;
    let posts = api.list_posts(id).await?;
    render(
        StatusCode::OK,
        &TopicDetailTemplate {
            current_user: user.name(),
            topic: &topic,
            posts: &posts,
        },
    )
}

pub async fn topic_detail(
    data: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<String>,
) -> impl Responder {
    let outcome = topic_detail_page(data.api.as_ref(), &user, &path).await;
    respond(user.name(), outcome)
}

async fn edit_topic_form(api: &dyn ForumApi, user: &CurrentUser, raw_id: &str) -> Result<HttpResponse> {
    let id = parse_id(raw_id, "topic")?;
    let topic = find_topic(api, id).await?;
    let form = TopicForm {
        title: topic.title,
        description: topic.description,
    };
    topic_form_page(user, StatusCode::OK, Some(id), &form, None)
}

pub async fn edit_topic_page(
    data: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<String>,
) -> impl Responder {
    let outcome = edit_topic_form(data.api.as_ref(), &user, &path).await;
    respond(user.name(), outcome)
}

pub async fn update_topic(
    data: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<String>,
    form: web::Form<TopicForm>,
) -> impl Responder {
    let id = match parse_id(&path, "topic") {
        Ok(id) => id,
        Err(err) => return respond(user.name(), Err(err)),
    };
    let outcome = match form.to_update() {
        Ok(update) => data.api.update_topic(id, update).await,
        Err(err) => Err(err),
    };
    match outcome {
        Ok(()) => {
            log::info!("topic {id} updated");
            redirect(&format!("/topics/{id}"))
        }
        Err(err) => {
            log::warn!("{err}");
            let message = err.to_string();
            let page = topic_form_page(&user, form_status(&err), Some(id), &form, Some(&message));
            respond(user.name(), page)
        }
    }
}

async fn remove_topic(api: &dyn ForumApi, raw_id: &str) -> Result<HttpResponse> {
    let id = parse_id(raw_id, "topic")?;
    api.delete_topic(id).await?;
    log::info!("topic {id} deleted");
    Ok(redirect("/topics"))
}

pub async fn delete_topic(
    data: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<String>,
) -> impl Responder {
    let outcome = remove_topic(data.api.as_ref(), &path).await;
    respond(user.name(), outcome)
}

// ── Posts ────────────────────────────────────────────────────────────────────

fn post_form_page(
    user: &CurrentUser,
    status: StatusCode,
    target: PostTarget,
    form: &PostForm,
    error: Option<&str>,
) -> Result<HttpResponse> {
    let (heading, action, submit_label, busy_label, cancel_url) = match target {
        PostTarget::New { topic_id } => (
            "Create New Post",
            format!("/topics/{topic_id}/posts"),
            "Create Post",
            "Creating...",
            format!("/topics/{topic_id}"),
        ),
        PostTarget::Edit { post_id } => (
            "Edit Post",
            format!("/posts/{post_id}/edit"),
            "Save Changes",
            "Saving...",
            format!("/posts/{post_id}"),
        ),
    };
    render(
        status,
        &PostFormTemplate {
            current_user: user.name(),
            heading,
            action: &action,
            submit_label,
            busy_label,
            cancel_url: &cancel_url,
            form,
            error,
        },
    )
}

#[derive(Debug, Clone, Copy)]
enum PostTarget {
    New { topic_id: i64 },
    Edit { post_id: i64 },
}

pub async fn new_post_page(user: CurrentUser, path: web::Path<String>) -> impl Responder {
    let outcome = parse_id(&path, "topic").and_then(|topic_id| {
        post_form_page(
            &user,
            StatusCode::OK,
            PostTarget::New { topic_id },
            &PostForm::default(),
            None,
        )
    });
    respond(user.name(), outcome)
}

pub async fn create_post(
    data: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<String>,
    form: web::Form<PostForm>,
) -> impl Responder {
    let topic_id = match parse_id(&path, "topic") {
        Ok(id) => id,
        Err(err) => return respond(user.name(), Err(err)),
    };
    let outcome = match form.to_new_post(user.session()) {
        Ok(post) => data.api.create_post(topic_id, post).await,
        Err(err) => Err(err),
    };
    match outcome {
        Ok(post) => {
            log::info!("post {} created in topic {topic_id}", post.id);
            redirect(&format!("/topics/{topic_id}"))
        }
        Err(err) => {
            log::warn!("{err}");
            let message = err.to_string();
            let page = post_form_page(
                &user,
                form_status(&err),
                PostTarget::New { topic_id },
                &form,
                Some(&message),
            );
            respond(user.name(), page)
        }
    }
}

async fn load_post(api: &dyn ForumApi, id: i64) -> Result<(Post, Vec<Comment>)> {
    let post = api.get_post(id).await?;
    let comments = api.list_comments(id).await?;
    Ok((post, comments))
}

fn post_detail_view(
    user: &CurrentUser,
    status: StatusCode,
    post: &Post,
    comments: &[Comment],
    draft: &str,
    comment_error: Option<&str>,
) -> Result<HttpResponse> {
    render(
        status,
        &PostDetailTemplate {
            current_user: user.name(),
            post,
            comments,
            draft,
            comment_error,
        },
    )
}

async fn post_detail_page(api: &dyn ForumApi, user: &CurrentUser, raw_id: &str) -> Result<HttpResponse> {
    let id = parse_id(raw_id, "post")?;
    let (post, comments) = load_post(api, id).await?;
    post_detail_view(user, StatusCode::OK, &post, &comments, "", None)
}

pub async fn post_detail(
    data: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<String>,
) -> impl Responder {
    let outcome = post_detail_page(data.api.as_ref(), &user, &path).await;
    respond(user.name(), outcome)
}

async fn submit_comment(
    api: &dyn ForumApi,
    user: &CurrentUser,
    raw_id: &str,
    form: &CommentForm,
) -> Result<HttpResponse> {
    let post_id = parse_id(raw_id, "post")?;
    let outcome = match form.to_new_comment(user.session()) {
        Ok(comment) => api.create_comment(post_id, comment).await,
        Err(err) => Err(err),
    };
    match outcome {
        Ok(comment) => {
            log::info!("comment {} added to post {post_id}", comment.id);
            Ok(redirect(&format!("/posts/{post_id}")))
        }
        Err(err) => {
            // Show the post again with the draft and the reason it was not sent.
            log::warn!("{err}");
            let message = err.to_string();
            match load_post(api, post_id).await {
                Ok((post, comments)) => post_detail_view(
                    user,
                    form_status(&err),
                    &post,
                    &comments,
                    &form.body,
                    Some(&message),
                ),
                // The post itself is gone or unreachable: still report the
                // comment failure and hand the draft back.
                Err(reload_err) => {
                    log::warn!("{reload_err}");
                    Ok(error_page_with_draft(user.name(), &err, Some(&form.body)))
                }
            }
        }
    }
}

pub async fn add_comment(
    data: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<String>,
    form: web::Form<CommentForm>,
) -> impl Responder {
    let outcome = submit_comment(data.api.as_ref(), &user, &path, &form).await;
    respond(user.name(), outcome)
}

async fn edit_post_form(api: &dyn ForumApi, user: &CurrentUser, raw_id: &str) -> Result<HttpResponse> {
    let post_id = parse_id(raw_id, "post")?;
    let post = api.get_post(post_id).await?;
    let form = PostForm {
        title: post.title,
        body: post.body,
    };
    post_form_page(user, StatusCode::OK, PostTarget::Edit { post_id }, &form, None)
}

pub async fn edit_post_page(
    data: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<String>,
) -> impl Responder {
    let outcome = edit_post_form(data.api.as_ref(), &user, &path).await;
    respond(user.name(), outcome)
}

pub async fn update_post(
    data: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<String>,
    form: web::Form<PostForm>,
) -> impl Responder {
    let post_id = match parse_id(&path, "post") {
        Ok(id) => id,
        Err(err) => return respond(user.name(), Err(err)),
    };
    let outcome = match form.to_update() {
        Ok(update) => data.api.update_post(post_id, update).await,
        Err(err) => Err(err),
    };
    match outcome {
        Ok(()) => {
            log::info!("post {post_id} updated");
            redirect(&format!("/posts/{post_id}"))
        }
        Err(err) => {
            log::warn!("{err}");
            let message = err.to_string();
            let page = post_form_page(
                &user,
                form_status(&err),
                PostTarget::Edit { post_id },
                &form,
                Some(&message),
            );
            respond(user.name(), page)
        }
    }
}

async fn remove_post(api: &dyn ForumApi, raw_id: &str, form: &DeletePostForm) -> Result<HttpResponse> {
    let id = parse_id(raw_id, "post")?;
    api.delete_post(id).await?;
    log::info!("post {id} deleted");
    Ok(match form.topic_id {
        Some(topic_id) if topic_id > 0 => redirect(&format!("/topics/{topic_id}")),
        _ => redirect("/topics"),
    })
}

/// Deletes a post together with its comments, then returns to its topic.
pub async fn delete_post(
    data: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<String>,
    form: web::Form<DeletePostForm>,
) -> impl Responder {
    let outcome = remove_post(data.api.as_ref(), &path, &form).await;
    respond(user.name(), outcome)
}

// ── Misc ─────────────────────────────────────────────────────────────────────

/// Liveness of this process only; the backend is probed at startup.
pub async fn health() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body("ok")
}
