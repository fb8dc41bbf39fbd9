//! InflammAI HTTP Surface
//!
//! Serves the built `inflamm-ui` client, and exposes the demo actions as
//! a JSON API plus a WebSocket change stream, built with Axum.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Landing page (client app)
//! - `GET /demo` - Demo shell (client app)
//! - Anything else outside `/api` - Built assets, falling back to `index.html`
//!
//! ## Wallet
//! - `GET /api/v1/wallet` - Current session
//! - `POST /api/v1/wallet/connect` - Simulated connect
//! - `POST /api/v1/wallet/disconnect` - Disconnect
//!
//! ## Health
//! - `GET /api/v1/health` - Dashboard data
//! - `POST /api/v1/health/connect` - Pair the mock device
//! - `POST /api/v1/health/disconnect` - Forget the mock device
//! - `POST /api/v1/health/sync` - Simulated sync
//!
//! ## Assistant
//! - `GET /api/v1/assistant/messages` - Transcript
//! - `POST /api/v1/assistant/messages` - Send a message
//! - `DELETE /api/v1/assistant/messages` - Clear the conversation
//! - `GET /api/v1/assistant/symptoms` - Symptom checker state
//! - `POST /api/v1/assistant/symptoms` - Add a symptom
//! - `DELETE /api/v1/assistant/symptoms` - Reset the symptom checker
//! - `DELETE /api/v1/assistant/symptoms/:id` - Remove a symptom
//!
//! ## Status
//! - `GET /healthz/live` - Liveness probe
//! - `GET /healthz` - Service status
//!
//! ## WebSocket
//! - `GET /ws` - State change stream
//!
//! # Example
//!
//! ```rust,ignore
//! use inflamm::api::{serve, AppState};
//! use inflamm::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let state = AppState::new(config.mode, &config.demo);
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::websocket::websocket_handler;

/// Build the router with all routes and middleware, serving the client
/// app from `ui_dir`
pub fn build_router(state: AppState, ui_dir: &Path) -> Router {
    let api_routes = Router::new()
        // Wallet routes
        .route("/wallet", get(routes::wallet::get_wallet))
        .route("/wallet/connect", post(routes::wallet::connect_wallet))
        .route("/wallet/disconnect", post(routes::wallet::disconnect_wallet))
        // Health routes
        .route("/health", get(routes::health::get_health))
        .route("/health/connect", post(routes::health::connect_health))
        .route("/health/disconnect", post(routes::health::disconnect_health))
        .route("/health/sync", post(routes::health::sync_health))
        // Assistant routes
        .route(
            "/assistant/messages",
            get(routes::assistant::get_messages)
                .post(routes::assistant::send_message)
                .delete(routes::assistant::clear_conversation),
        )
        .route(
            "/assistant/symptoms",
            get(routes::assistant::get_symptoms)
                .post(routes::assistant::add_symptom)
                .delete(routes::assistant::reset_symptoms),
        )
        .route(
            "/assistant/symptoms/:id",
            delete(routes::assistant::remove_symptom),
        )
        .fallback(routes::pages::api_not_found);

    let status_routes = Router::new()
        .route("/live", get(routes::status::liveness))
        .route("/", get(routes::status::status));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/ws", get(websocket_handler))
        .nest("/api/v1", api_routes)
        .nest("/healthz", status_routes)
        .fallback_service(routes::pages::ui_service(ui_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the HTTP server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    state.start_event_relay();
    state.auto_connect();

    let router = build_router(state, &config.ui_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("InflammAI listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("InflammAI shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
