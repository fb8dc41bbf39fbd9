//! Wallet Routes
//!
//! - GET /api/v1/wallet - Current session
//! - POST /api/v1/wallet/connect - Simulated connect (waits on latency)
//! - POST /api/v1/wallet/disconnect - Reset the session

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::WalletResponse;
use crate::api::state::AppState;
use crate::wallet::{short_address, WalletSession};

fn response(session: WalletSession) -> Json<WalletResponse> {
    let short = session.address().map(|a| short_address(a, 4));
    Json(WalletResponse {
        session,
        short_address: short,
    })
}

/// GET /api/v1/wallet
pub async fn get_wallet(State(state): State<Arc<AppState>>) -> Json<WalletResponse> {
    response(state.wallet.session().await)
}

/// POST /api/v1/wallet/connect
pub async fn connect_wallet(State(state): State<Arc<AppState>>) -> Json<WalletResponse> {
    response(state.wallet.connect().await)
}

/// POST /api/v1/wallet/disconnect
pub async fn disconnect_wallet(State(state): State<Arc<AppState>>) -> Json<WalletResponse> {
    response(state.wallet.disconnect().await)
}
