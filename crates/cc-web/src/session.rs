//! campus-commons/crates/cc-web/src/session.rs
//!
//! Reads and writes the session cookie. The cookie is trusted as-is.

use std::future::{ready, Ready};

use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use cc_core::session::Session;

use crate::AppState;

/// The visitor's session, if the cookie holds a readable one.
#[derive(Debug, Clone, Default)]
pub struct CurrentUser(pub Option<Session>);

impl CurrentUser {
    pub fn session(&self) -> Option<&Session> {
        self.0.as_ref()
    }

    /// Username for the page header.
    pub fn name(&self) -> Option<&str> {
        self.0.as_ref().map(Session::username)
    }

    /// Reads the session cookie named in `AppState`.
    pub fn from_http(req: &HttpRequest) -> Self {
        let session = req
            .app_data::<web::Data<AppState>>()
            .and_then(|state| req.cookie(&state.session_cookie))
            .and_then(|cookie| Session::decode(cookie.value()));
        CurrentUser(session)
    }
}

impl FromRequest for CurrentUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(CurrentUser::from_http(req)))
    }
}

/// A cookie with no expiry: the session lasts until logout or the browser
/// discards it.
pub fn session_cookie(name: &str, session: &Session) -> Cookie<'static> {
    Cookie::build(name.to_owned(), session.encode())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

pub fn removal_cookie(name: &str) -> Cookie<'static> {
    let mut cookie = Cookie::build(name.to_owned(), "").path("/").finish();
    cookie.make_removal();
    cookie
}
