//! Health Dashboard Routes
//!
//! - GET /api/v1/health - Snapshot, metric cards and activity feed
//! - POST /api/v1/health/connect - Simulated device pairing
//! - POST /api/v1/health/disconnect - Forget the device
//! - POST /api/v1/health/sync - Simulated sync

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{HealthResponse, SyncResponse};
use crate::api::state::AppState;

/// GET /api/v1/health
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let snapshot = state.health.snapshot().await;
    Json(HealthResponse {
        connected: state.health.is_connected().await,
        daily_average_points: snapshot.daily_average_points(),
        cards: snapshot.metric_cards(),
        recent_activities: state.health.recent_activities(),
        snapshot,
    })
}

/// POST /api/v1/health/connect
pub async fn connect_health(State(state): State<Arc<AppState>>) -> StatusCode {
    state.health.connect().await;
    StatusCode::NO_CONTENT
}

/// POST /api/v1/health/disconnect
pub async fn disconnect_health(State(state): State<Arc<AppState>>) -> StatusCode {
    state.health.disconnect().await;
    StatusCode::NO_CONTENT
}

/// POST /api/v1/health/sync
///
/// The metrics themselves never change; only the last-synced time moves.
pub async fn sync_health(State(state): State<Arc<AppState>>) -> Json<SyncResponse> {
    let result = state.health.sync().await;
    let snapshot = state.health.snapshot().await;

    Json(SyncResponse {
        success: result.success,
        message: result.message,
        last_synced_at: snapshot.last_synced_at.to_rfc3339(),
    })
}
