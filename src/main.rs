//! fargate-web: a minimal containerized web service.
//!
//! Exposes a health-check endpoint for load balancers, an HTML landing page,
//! and a JSON API descriptor. Configuration comes from the `PORT` and
//! `NODE_ENV` environment variables; everything else is fixed at compile time.
//! Process supervision (restarts, scaling, draining) is the container
//! platform's job — this binary just serves requests until told to stop.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tokio::signal;
use tracing::info;

mod api;
mod config;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fargate_web=info,tower_http=warn".into()),
        )
        .init();

    let config = Config::from_env();
    let state = Arc::new(AppState::new(config));

    // Bind on all interfaces — the container network decides who can reach us.
    // A bind failure (port taken, permission denied) is fatal: the error
    // propagates out of main and the process exits non-zero so the
    // orchestrator sees a failed task.
    let addr: SocketAddr = format!("0.0.0.0:{}", state.config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(port = state.config.port, "server listening");
    info!(
        "health check available at http://localhost:{}/health",
        state.config.port
    );

    let trace_layer = tower_http::trace::TraceLayer::new_for_http()
        .make_span_with(tower_http::trace::DefaultMakeSpan::new().level(tracing::Level::INFO))
        .on_response(tower_http::trace::DefaultOnResponse::new().level(tracing::Level::INFO));

    let app = api::router(state)
        .layer(axum::middleware::from_fn(
            api::request_id::request_id_middleware,
        ))
        .layer(trace_layer);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result.context("server error")?;
        }
        _ = shutdown_signal() => {
            info!("shutdown signal received");
        }
    }

    Ok(())
}

/// Resolve when the process receives Ctrl+C or SIGTERM.
///
/// Container platforms stop tasks with SIGTERM and only escalate to SIGKILL
/// after a grace period; returning from `main` on the first signal lets
/// in-flight connections close cleanly.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
