//! # AppError
//!
//! Centralized error handling for the CampusCommons client.
//! Every failure is caught by the page that triggered it and shown to the
//! user as the `Display` text of one of these variants.

use thiserror::Error;

/// The primary error type for all cc-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A required form field is blank or a path id is malformed
    #[error("{0}")]
    Validation(String),

    /// A mutating action was attempted without a session
    #[error("{0}")]
    Unauthenticated(String),

    /// Resource missing on the client side (e.g. topic lookup by id)
    #[error("{0} not found")]
    NotFound(String),

    /// The backend answered with a non-2xx status.
    /// `message` is the trimmed response body.
    #[error("{context}: {status} {message}")]
    Backend {
        context: String,
        status: u16,
        message: String,
    },

    /// The backend could not be reached at all
    #[error("{context}: backend unreachable ({reason})")]
    Transport { context: String, reason: String },

    /// The backend answered 2xx with a body we could not decode
    #[error("{context}: unexpected response ({reason})")]
    Decode { context: String, reason: String },

    /// Local failure, e.g. a template that failed to render
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }
}

/// A specialized Result type for CampusCommons logic.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_reads_like_a_status_line() {
        let err = AppError::Backend {
            context: "Login failed".into(),
            status: 400,
            message: "Username is required".into(),
        };
        assert_eq!(err.to_string(), "Login failed: 400 Username is required");
    }

    #[test]
    fn not_found_names_the_resource() {
        assert_eq!(AppError::NotFound("Topic".into()).to_string(), "Topic not found");
    }
}
