//! HTTP API server for the meteo gateway

pub mod health;
pub mod webhooks;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::Result;
use crate::channels::Channel;
use crate::voice::Transcriber;
use crate::weather::WeatherProvider;

/// Shared state for API handlers
///
/// Read-only after construction; invocations share nothing mutable.
pub struct ApiState {
    /// Chat channel; `None` when no bot token is configured, in which
    /// case updates are acknowledged and dropped
    pub channel: Option<Arc<dyn Channel>>,

    /// Weather provider
    pub weather: Arc<dyn WeatherProvider>,

    /// Speech-to-text provider
    pub transcriber: Arc<dyn Transcriber>,
}

/// Build the gateway router
#[must_use]
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/api/webhooks/telegram",
            post(webhooks::telegram::handle_update),
        )
        .with_state(state)
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
}

/// Run the API server
///
/// # Errors
///
/// Returns error if the server fails to bind or run
pub async fn serve(state: Arc<ApiState>, port: u16) -> Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| crate::Error::Config(format!("failed to bind API server: {e}")))?;

    tracing::info!(port, "API server listening");

    axum::serve(listener, router(state))
        .await
        .map_err(|e| crate::Error::Config(format!("API server error: {e}")))?;

    Ok(())
}
