/// Application state, router, and session middleware
///
/// The state is an explicit struct built once at startup (config plus the
/// storage handle) and handed to handlers through Axum's `State` extractor;
/// there is no ambient global.
///
/// # Example
///
/// ```no_run
/// use taskboard_web::{app::AppState, config::Config};
/// use taskboard_shared::db::pool::create_pool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(config.database_config()).await?;
/// let state = AppState::new(pool, config);
/// let app = taskboard_web::app::build_router(state);
/// # Ok(())
/// # }
/// ```
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use taskboard_shared::auth::session;
use taskboard_shared::models::user::User;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::Config;
use crate::routes;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. Uses Arc
/// internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets the session signing secret
    pub fn session_secret(&self) -> &str {
        &self.config.session.secret
    }
}

/// The identity resolved from a session cookie, injected into request
/// extensions by [`session_auth_layer`]
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub user_name: String,
}

/// Builds the complete router
///
/// # Routes
///
/// ```text
/// /
/// ├── GET  /health            # Liveness + db ping (public)
/// ├── GET/POST /login         # Login form / authenticate (public)
/// ├── GET/POST /signup        # Signup form / register (public)
/// ├── GET  /                  # Task list (session required)
/// ├── POST /add               # Create task
/// ├── GET  /update/:id        # Toggle completion
/// ├── GET  /delete/:id        # Delete task
/// └── GET  /logout            # End session
/// ```
///
/// Protected routes sit behind [`session_auth_layer`]; a request without a
/// valid session is redirected to `/login`.
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/login",
            get(routes::auth::login_form).post(routes::auth::login),
        )
        .route(
            "/signup",
            get(routes::auth::signup_form).post(routes::auth::signup),
        );

    let protected_routes = Router::new()
        .route("/", get(routes::tasks::list))
        .route("/add", post(routes::tasks::add))
        .route("/update/:id", get(routes::tasks::toggle))
        .route("/delete/:id", get(routes::tasks::delete))
        .route("/logout", get(routes::auth::logout))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            session_auth_layer,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Session authentication middleware
///
/// Resolves the session cookie to a user exactly once per request and
/// injects a [`CurrentUser`] extension. A missing, malformed, expired, or
/// orphaned (user deleted) session redirects to the login form rather than
/// erroring; database failures are the only 500 path.
pub async fn session_auth_layer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = req
        .headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|raw| session::cookie_value(raw, session::SESSION_COOKIE))
        .map(str::to_owned);

    let Some(token) = token else {
        return Redirect::to("/login").into_response();
    };

    let user_id = match session::verify_token(&token, state.session_secret()) {
        Ok(user_id) => user_id,
        Err(e) => {
            tracing::debug!("Rejected session token: {}", e);
            return Redirect::to("/login").into_response();
        }
    };

    let user = match User::find_by_id(&state.db, user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::debug!(user_id, "Session references a user that no longer exists");
            return Redirect::to("/login").into_response();
        }
        Err(e) => {
            return crate::error::WebError::Internal(format!("Database error: {}", e))
                .into_response();
        }
    };

    req.extensions_mut().insert(CurrentUser {
        id: user.id,
        email: user.email,
        user_name: user.user_name,
    });

    next.run(req).await
}
