mod config;
mod error;
mod handlers;
mod telemetry;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use color_eyre::eyre::WrapErr;
use forager::MoveSelector;
use rand::Rng;
use tracing::{info, warn};

use crate::config::Config;
use crate::handlers::{AppState, SharedState};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::info))
        .route("/info", get(handlers::info))
        .route("/start", post(handlers::start))
        .route("/move", post(handlers::get_move))
        .route("/end", post(handlers::end))
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("cannot listen for Ctrl-C ({err}), running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    let config = Config::from_env().wrap_err("invalid configuration")?;
    let sentry_guard = telemetry::init_sentry(config.sentry_dsn.as_deref());
    telemetry::init(config.log_format, sentry_guard.is_some())?;

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!(
        seed,
        orientation = ?config.selector.orientation,
        tail_policy = ?config.selector.tail_policy,
        fallback = ?config.selector.fallback,
        "Hello Snakes!"
    );

    let state = Arc::new(AppState::new(
        MoveSelector::new(config.selector),
        config.appearance.clone(),
        seed,
    ));
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .wrap_err_with(|| format!("cannot bind port {}", config.port))?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
