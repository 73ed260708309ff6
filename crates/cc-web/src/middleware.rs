//! campus-commons/crates/cc-web/src/middleware.rs Middleware
//!
//! Request logging and response hardening headers.

use actix_web::middleware::{DefaultHeaders, Logger};

/// Access log line per request:
/// remote-ip "request-line" status-code response-size "referrer" "user-agent"
pub fn standard_middleware() -> Logger {
    Logger::default()
}

/// Headers attached to every page. The client serves only its own HTML,
/// so no CORS policy is needed.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("Referrer-Policy", "strict-origin-when-cross-origin"))
        .add(("X-Frame-Options", "DENY"))
}
