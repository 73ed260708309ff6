//! # cc-web
//!
//! The page routing and orchestration layer for the CampusCommons web client.

pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod session;

use actix_web::web;
use cc_core::traits::ForumApi;

/// State shared across all actix-web workers.
pub struct AppState {
    pub api: Box<dyn ForumApi>,
    /// Name of the cookie carrying the session blob
    pub session_cookie: String,
}

impl AppState {
    pub fn new(api: Box<dyn ForumApi>, session_cookie: impl Into<String>) -> Self {
        Self {
            api,
            session_cookie: session_cookie.into(),
        }
    }
}

/// Configures the routes for the forum pages.
///
/// # Developer Note
/// `/topics/new` must be registered before `/topics/{id}`, otherwise "new"
/// is taken for an id.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .app_data(web::FormConfig::default().error_handler(pages::form_rejected))
            // Session
            .route("/", web::get().to(handlers::login_page))
            .service(
                web::resource("/login")
                    .route(web::get().to(handlers::login_page))
                    .route(web::post().to(handlers::login)),
            )
            .route("/logout", web::post().to(handlers::logout))
            // Topics
            .service(
                web::resource("/topics")
                    .route(web::get().to(handlers::list_topics))
                    .route(web::post().to(handlers::create_topic)),
            )
            .route("/topics/new", web::get().to(handlers::new_topic_page))
            .route("/topics/{id}", web::get().to(handlers::topic_detail))
            .service(
                web::resource("/topics/{id}/edit")
                    .route(web::get().to(handlers::edit_topic_page))
                    .route(web::post().to(handlers::update_topic)),
            )
            .route("/topics/{id}/delete", web::post().to(handlers::delete_topic))
            // Posts
            .route("/topics/{id}/posts/new", web::get().to(handlers::new_post_page))
            .route("/topics/{id}/posts", web::post().to(handlers::create_post))
            .route("/posts/{id}", web::get().to(handlers::post_detail))
            .service(
                web::resource("/posts/{id}/edit")
                    .route(web::get().to(handlers::edit_post_page))
                    .route(web::post().to(handlers::update_post)),
            )
            .route("/posts/{id}/delete", web::post().to(handlers::delete_post))
            // Comments
            .route("/posts/{id}/comments", web::post().to(handlers::add_comment))
            .route("/health", web::get().to(handlers::health)),
    );
}
