/// Error handling for the anonymous variant
///
/// Recoverable failures (bad due date, missing task id) are handled in the
/// route handlers with a flash and a redirect; what reaches this type is an
/// infrastructure failure and renders as a bare 500 page.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

use crate::views;

/// App result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Unified error type
#[derive(Debug)]
pub enum AppError {
    /// Internal server error (500)
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Internal(msg) = self;
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

/// Convert sqlx errors to app errors
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Internal(format!("Database error: {}", err))
    }
}
