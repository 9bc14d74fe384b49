//! # Taskboard Basic Server
//!
//! The anonymous Taskboard variant: one shared to-do list, no accounts. It
//! needs no session secret, so configuration is just the bind address and
//! the database URL.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p taskboard-basic
//! ```

use std::env;

use taskboard_basic::app::{build_router, AppState};
use taskboard_shared::db::pool::DatabaseConfig;
use taskboard_shared::db::{migrations::run_migrations, pool::create_pool};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard_basic=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Taskboard basic v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load .env file if present (for development)
    dotenvy::dotenv().ok();

    let host = env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("HTTP_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()?;
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://taskboard.db".to_string());

    let pool = create_pool(DatabaseConfig {
        url: database_url,
        ..DatabaseConfig::default()
    })
    .await?;
    run_migrations(&pool).await?;

    let addr = format!("{}:{}", host, port);
    let app = build_router(AppState::new(pool));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
