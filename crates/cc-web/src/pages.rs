//! Response helpers shared by every page.

use actix_web::error::{InternalError, UrlencodedError};
use actix_web::http::{header, StatusCode};
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;
use cc_core::error::{AppError, Result};
use cc_ui::ErrorTemplate;

use crate::session::CurrentUser;

/// Renders a template with the given status.
pub fn render<T: Template>(status: StatusCode, template: &T) -> Result<HttpResponse> {
    let html = template
        .render()
        .map_err(|e| AppError::Internal(format!("template rendering failed: {e}")))?;
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// Post/redirect/get: every successful form submission ends here.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Status for a page that failed to load.
pub fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::Validation(_) => StatusCode::BAD_REQUEST,
        AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::Backend { status, .. } if (400..500).contains(status) => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        AppError::Backend { .. } | AppError::Transport { .. } | AppError::Decode { .. } => {
            StatusCode::BAD_GATEWAY
        }
        AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Status for a form shown again after a failed submission.
pub fn form_status(err: &AppError) -> StatusCode {
    match err {
        AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        other => status_for(other),
    }
}

fn heading_for(err: &AppError) -> &'static str {
    match err {
        AppError::Validation(_) => "Invalid Request",
        AppError::Unauthenticated(_) => "Not Logged In",
        AppError::NotFound(_) => "Not Found",
        _ => "Something Went Wrong",
    }
}

/// Full-page error view. Falls back to plain text if even that fails.
pub fn error_page(current_user: Option<&str>, err: &AppError) -> HttpResponse {
    error_page_with_draft(current_user, err, None)
}

/// Error view that also hands back text the visitor could not send.
pub fn error_page_with_draft(
    current_user: Option<&str>,
    err: &AppError,
    draft: Option<&str>,
) -> HttpResponse {
    let status = status_for(err);
    if status.is_server_error() {
        log::error!("{err}");
    } else {
        log::warn!("{err}");
    }

    let message = err.to_string();
    let template = ErrorTemplate {
        current_user,
        heading: heading_for(err),
        message: &message,
        draft: draft.filter(|text| !text.trim().is_empty()),
    };
    render(status, &template).unwrap_or_else(|render_err| {
        log::error!("{render_err}");
        HttpResponse::build(status).body(message.clone())
    })
}

/// `FormConfig` error handler: a body that does not decode as the expected
/// form gets the regular error page instead of actix's bare 400.
pub fn form_rejected(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    let user = CurrentUser::from_http(req);
    let failure = AppError::validation(format!("Invalid form submission: {err}"));
    InternalError::from_response(err, error_page(user.name(), &failure)).into()
}

/// Turns a page outcome into a response.
pub fn respond(current_user: Option<&str>, outcome: Result<HttpResponse>) -> HttpResponse {
    outcome.unwrap_or_else(|err| error_page(current_user, &err))
}
