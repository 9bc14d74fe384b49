/// Error handling for the web server
///
/// This module provides a unified error type that maps to HTTP responses.
/// Handlers return `Result<T, WebError>`; since every page in this app is a
/// server-side render, errors come back as small HTML pages rather than JSON
/// bodies, and an unauthenticated request is bounced to the login form.
///
/// The user-recoverable failures (bad signup fields, wrong password, missing
/// task id) never reach this type: handlers translate those into a flash
/// message and a redirect. What lands here is genuinely exceptional.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use std::fmt;

use crate::views;

/// Web result type alias
pub type WebResult<T> = Result<T, WebError>;

/// Unified web error type
#[derive(Debug)]
pub enum WebError {
    /// No session; redirect to the login form (302)
    Unauthorized,

    /// Resource does not exist (404)
    NotFound(String),

    /// Authenticated but not allowed (403)
    Forbidden(String),

    /// Request was syntactically unusable (400)
    BadRequest(String),

    /// Internal server error (500)
    Internal(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::Unauthorized => write!(f, "Unauthorized"),
            WebError::NotFound(msg) => write!(f, "Not found: {}", msg),
            WebError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            WebError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            WebError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for WebError {}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::Unauthorized => Redirect::to("/login").into_response(),
            WebError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Html(views::error_page("Not found", &msg)),
            )
                .into_response(),
            WebError::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                Html(views::error_page("Forbidden", &msg)),
            )
                .into_response(),
            WebError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Html(views::error_page("Bad request", &msg)),
            )
                .into_response(),
            WebError::Internal(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(views::error_page(
                        "Something went wrong",
                        "An internal error occurred. Please try again.",
                    )),
                )
                    .into_response()
            }
        }
    }
}

/// Convert sqlx errors to web errors
impl From<sqlx::Error> for WebError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => WebError::NotFound("Resource not found".to_string()),
            _ => WebError::Internal(format!("Database error: {}", err)),
        }
    }
}

/// Convert password hashing errors to web errors
impl From<taskboard_shared::auth::password::PasswordError> for WebError {
    fn from(err: taskboard_shared::auth::password::PasswordError) -> Self {
        WebError::Internal(format!("Password operation failed: {}", err))
    }
}
