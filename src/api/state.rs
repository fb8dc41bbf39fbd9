//! Application State
//!
//! Shared state accessible by all handlers. Each demo holder is built once
//! here and shared by `Arc`; there are no globals.

use std::sync::Arc;
use std::time::Instant;

use crate::assistant::{ConversationEngine, SymptomChecker};
use crate::config::{DemoConfig, Mode};
use crate::health::HealthState;
use crate::wallet::WalletState;
use crate::websocket::{ConnectionHub, HubConfig};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Mock wallet session
    pub wallet: Arc<WalletState>,
    /// Mock health snapshot
    pub health: Arc<HealthState>,
    /// Mock assistant conversation
    pub conversation: Arc<ConversationEngine>,
    /// Mock symptom checker
    pub symptoms: Arc<SymptomChecker>,
    /// WebSocket connection hub for pushing state changes
    pub ws_hub: Arc<ConnectionHub>,
    /// Deployment mode
    pub mode: Mode,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Build every holder with the configured latencies
    pub fn new(mode: Mode, demo: &DemoConfig) -> Self {
        Self::from_parts(
            mode,
            WalletState::new(demo.wallet_latency()),
            HealthState::new(demo.health_latency()),
            ConversationEngine::new(demo.reply_latency()),
            SymptomChecker::new(demo.symptom_latency()),
        )
    }

    /// Assemble from pre-built holders
    pub fn from_parts(
        mode: Mode,
        wallet: WalletState,
        health: HealthState,
        conversation: ConversationEngine,
        symptoms: SymptomChecker,
    ) -> Self {
        Self {
            wallet: Arc::new(wallet),
            health: Arc::new(health),
            conversation: Arc::new(conversation),
            symptoms: Arc::new(symptoms),
            ws_hub: Arc::new(ConnectionHub::new(HubConfig::default())),
            mode,
            start_time: Instant::now(),
        }
    }

    /// Forward every holder's change events into the WebSocket hub.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_event_relay(&self) {
        let receivers = [
            self.wallet.subscribe(),
            self.health.subscribe(),
            self.conversation.subscribe(),
            self.symptoms.subscribe(),
        ];
        for rx in receivers {
            Arc::clone(&self.ws_hub).relay(rx);
        }
    }

    /// Connect the mock wallet in the background when the mode asks for it
    pub fn auto_connect(&self) {
        if !self.mode.auto_connect_wallet() {
            return;
        }
        tracing::info!("Development mode: auto-connecting mock wallet");
        let wallet = Arc::clone(&self.wallet);
        tokio::spawn(async move {
            wallet.connect().await;
        });
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Get WebSocket connection count
    pub async fn ws_connection_count(&self) -> usize {
        self.ws_hub.connection_count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::websocket::ServerMessage;
    use tokio::sync::mpsc;

    fn test_state(mode: Mode) -> AppState {
        AppState::new(mode, &DemoConfig::instant())
    }

    #[tokio::test]
    async fn test_development_auto_connects_wallet() {
        let state = test_state(Mode::Development);
        let mut rx = state.wallet.subscribe();

        state.auto_connect();
        rx.recv().await.unwrap();

        assert!(state.wallet.session().await.is_connected());
    }

    #[tokio::test]
    async fn test_production_leaves_wallet_disconnected() {
        let state = test_state(Mode::Production);
        state.auto_connect();
        tokio::task::yield_now().await;

        assert!(!state.wallet.session().await.is_connected());
    }

    #[tokio::test]
    async fn test_event_relay_reaches_websocket_subscribers() {
        let state = test_state(Mode::Production);
        state.start_event_relay();

        let (tx, mut rx) = mpsc::unbounded_channel();
        let id = state.ws_hub.register(tx).await.unwrap();
        state
            .ws_hub
            .subscribe(&id, vec!["health".to_string()])
            .await
            .unwrap();
        assert_eq!(state.ws_connection_count().await, 1);

        state.health.sync().await;

        match rx.recv().await.unwrap() {
            ServerMessage::Event { topic, .. } => assert_eq!(topic, "health"),
            other => panic!("Expected Event, got {:?}", other),
        }
    }
}
