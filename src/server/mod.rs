pub mod handlers;
pub mod types;

use crate::{Result, config::Config, upstream::HttpUpstream};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Builds the router with every route, permissive CORS and request tracing.
/// Request bodies are not size-limited.
pub fn router(state: AppState) -> Router {
    router_with_body_limit(state, None)
}

/// Like [`router`], but rejects bodies larger than `max_body_bytes` with 413.
pub fn router_with_body_limit(state: AppState, max_body_bytes: Option<usize>) -> Router {
    let body_limit = match max_body_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::home))
        .route("/status", get(handlers::status))
        .route("/history", get(handlers::history))
        .route("/chat", post(handlers::chat))
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let upstream = HttpUpstream::new(config.upstream.clone())?;
    info!(
        "Relaying chat requests to {} (timeout {}s)",
        upstream.url(),
        config.upstream.timeout_secs
    );

    let app = router_with_body_limit(
        AppState {
            upstream: Arc::new(upstream),
        },
        config.server.max_body_bytes,
    );

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
