use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::env;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::api::error::ApiResult;
use crate::api::handlers::matches::{
    create_match_handler, delete_match_handler, get_match_handler, list_matches_handler,
    update_match_handler,
};
use crate::api::handlers::odds::{
    create_odds_handler, delete_odds_handler, get_odds_handler, list_odds_by_match_handler,
    update_odds_handler,
};
use crate::db;

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,hyper=warn,tower=warn")),
        )
        .init();
}

/// Assemble the router over an existing pool. Split out from `create_app`
/// so tests can run the real routes against a test database.
pub fn build_router(pool: PgPool) -> Router {
    Router::new()
        .route(
            "/api/matches",
            post(create_match_handler).get(list_matches_handler),
        )
        .route(
            "/api/matches/{id}",
            get(get_match_handler)
                .put(update_match_handler)
                .delete(delete_match_handler),
        )
        .route("/api/match-odds", post(create_odds_handler))
        .route(
            "/api/match-odds/{id}",
            get(get_odds_handler)
                .put(update_odds_handler)
                .delete(delete_odds_handler),
        )
        .route("/api/match-odds/match/{matchId}", get(list_odds_by_match_handler))
        .route("/health", get(health_handler))
        .with_state(pool)
        .layer(TraceLayer::new_for_http())
}

pub async fn create_app() -> anyhow::Result<Router> {
    let database_url = env::var("DATABASE_URL")?;
    let pool = db::create_pool(&database_url).await?;

    sqlx::migrate!().run(&pool).await?;

    Ok(build_router(pool))
}

async fn health_handler(State(pool): State<PgPool>) -> ApiResult<&'static str> {
    db::health_check(&pool).await?;
    Ok("OK")
}

pub async fn run_server() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting match odds server");

    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C signal handler");
        info!("Shutting down gracefully...");
    };

    let app = create_app().await?;

    let port = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
