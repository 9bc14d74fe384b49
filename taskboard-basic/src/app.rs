/// Application state and router
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::routes;

/// Shared application state
///
/// The anonymous variant needs nothing beyond the storage handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Builds the complete router
///
/// # Routes
///
/// ```text
/// /
/// ├── GET  /health       # Liveness + db ping
/// ├── GET  /             # Task list
/// ├── POST /add          # Create task
/// ├── GET  /update/:id   # Toggle completion
/// └── GET  /delete/:id   # Delete task
/// ```
///
/// No route is protected; every visitor sees and edits the same list.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health_check))
        .route("/", get(routes::list))
        .route("/add", post(routes::add))
        .route("/update/:id", get(routes::toggle))
        .route("/delete/:id", get(routes::delete))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
