//! RPC Gateway
//!
//! HTTP/JSON transport around the [`TransferProcessor`]. Each request runs on
//! its own tokio task; all of them converge on the single ledger lock.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use crate::transfer::TransferProcessor;
use state::AppState;

/// Build the application router
pub fn build_router(processor: Arc<TransferProcessor>) -> Router {
    let state = Arc::new(AppState::new(processor));

    Router::new()
        .route("/api/v1/health", get(handlers::health_check))
        .route("/api/v1/fund_transfer", post(handlers::process_fund_transfer))
        .route(
            "/api/v1/accounts/{account}",
            get(handlers::get_account_balance),
        )
        .with_state(state)
        // Stateless, added after with_state
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Bind the configured address and serve until Ctrl-C.
///
/// A bind failure is returned to the caller; the process is expected to exit.
pub async fn run_server(
    config: &GatewayConfig,
    processor: Arc<TransferProcessor>,
) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    serve(listener, processor, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    processor: Arc<TransferProcessor>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().context("Listener has no local address")?;
    tracing::info!("Fund Transfer Service listening on {}", local_addr);

    axum::serve(listener, build_router(processor))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    tracing::info!("Fund Transfer Service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
