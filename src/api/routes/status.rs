//! Status Routes
//!
//! - GET /healthz/live - Liveness probe (process is alive)
//! - GET /healthz - Service status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::StatusResponse;
use crate::api::state::AppState;

/// GET /healthz/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        mode: state.mode.as_str().to_string(),
        uptime_seconds: state.uptime_seconds(),
        ws_connections: state.ws_connection_count().await,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
