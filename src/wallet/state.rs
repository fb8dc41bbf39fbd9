//! Wallet state holder

use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use super::session::WalletSession;
use crate::events::{self, DemoEvent};
use crate::latency::SharedLatency;

/// Owns the current [`WalletSession`]
pub struct WalletState {
    session: Arc<RwLock<WalletSession>>,
    latency: SharedLatency,
    events: broadcast::Sender<DemoEvent>,
}

impl WalletState {
    /// Create an unconnected wallet whose connect waits on `latency`
    pub fn new(latency: SharedLatency) -> Self {
        Self {
            session: Arc::new(RwLock::new(WalletSession::disconnected())),
            latency,
            events: events::channel(),
        }
    }

    /// Simulate connecting a wallet.
    ///
    /// Resolves after the configured latency with the placeholder account
    /// installed. The lock is not held while waiting.
    pub async fn connect(&self) -> WalletSession {
        tracing::debug!("Connecting mock wallet");
        self.latency.wait().await;

        let session = WalletSession::demo();
        *self.session.write().await = session.clone();

        tracing::info!(address = ?session.address(), "Mock wallet connected");
        events::publish(
            &self.events,
            DemoEvent::WalletChanged {
                session: session.clone(),
            },
        );
        session
    }

    /// Reset to the initial unconnected session
    pub async fn disconnect(&self) -> WalletSession {
        let session = WalletSession::disconnected();
        *self.session.write().await = session.clone();

        tracing::info!("Mock wallet disconnected");
        events::publish(
            &self.events,
            DemoEvent::WalletChanged {
                session: session.clone(),
            },
        );
        session
    }

    /// Current session
    pub async fn session(&self) -> WalletSession {
        self.session.read().await.clone()
    }

    /// Subscribe to wallet change events
    pub fn subscribe(&self) -> broadcast::Receiver<DemoEvent> {
        self.events.subscribe()
    }
}
