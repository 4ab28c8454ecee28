use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use tablebook::config::AppConfig;
use tablebook::db;
use tablebook::handlers;
use tablebook::services::storage::SqliteStore;
use tablebook::services::time_slots::initialize_times;
use tablebook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;
    tracing::info!("using booking store at {}", config.database_url);

    let state = Arc::new(AppState {
        store: Box::new(SqliteStore::new(Arc::new(Mutex::new(conn)))),
        available_times: Mutex::new(initialize_times()),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/api/times",
            get(handlers::times::get_times).post(handlers::times::dispatch_times),
        )
        .route(
            "/api/reservations",
            post(handlers::reservations::create_reservation),
        )
        .route("/confirmed", get(handlers::reservations::get_confirmed))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
