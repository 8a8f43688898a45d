//! HTTP surface: three HTML pages plus a 404 fallback.
//!
//! Handlers share one immutable [`AppState`]; nothing is written to it after
//! startup, so requests never coordinate with each other.

pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::{net::TcpListener, signal};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::ConfigProvider;
use crate::utils::error::Result;

use routes::{about_handler, index_handler, login_handler, not_found_handler};
pub use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/about", get(about_handler))
        .route("/login", get(login_handler))
        .fallback(not_found_handler)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

pub async fn serve<C: ConfigProvider>(config: &C) -> Result<()> {
    tracing::info!("Initializing state...");
    let state = AppState::from_config(config)?;
    tracing::info!("Using PubChem at {}", config.pubchem_base_url());

    let address = format!("{}:{}", config.host(), config.port());
    tracing::info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
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
}
