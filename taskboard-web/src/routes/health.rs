/// Health check endpoint
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use taskboard_shared::db::pool::health_check as db_health_check;

use crate::app::AppState;

/// Liveness check including a database ping
///
/// Returns `200 ok` when the database answers, `503 unavailable` otherwise.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match db_health_check(&state.db).await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    }
}
