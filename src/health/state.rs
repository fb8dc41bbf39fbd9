//! Health state holder

use chrono::{Duration, Utc};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use super::snapshot::{recent_activities, ActivityEntry, HealthSnapshot, MetricCard, SyncResult};
use crate::events::{self, DemoEvent};
use crate::latency::SharedLatency;

#[derive(Debug)]
struct Inner {
    snapshot: HealthSnapshot,
    connected: bool,
}

/// Owns the [`HealthSnapshot`] and the device connection flag
pub struct HealthState {
    inner: Arc<RwLock<Inner>>,
    latency: SharedLatency,
    events: broadcast::Sender<DemoEvent>,
}

impl HealthState {
    /// Seed the demo snapshot. The demo device starts out connected.
    pub fn new(latency: SharedLatency) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                snapshot: HealthSnapshot::demo(Utc::now()),
                connected: true,
            })),
            latency,
            events: events::channel(),
        }
    }

    /// Simulate pairing a health device
    pub async fn connect(&self) {
        self.latency.wait().await;

        let mut inner = self.inner.write().await;
        inner.connected = true;
        let event = changed(&inner);
        drop(inner);

        tracing::info!("Mock health device connected");
        events::publish(&self.events, event);
    }

    /// Forget the paired device. Metrics are kept.
    pub async fn disconnect(&self) {
        let mut inner = self.inner.write().await;
        inner.connected = false;
        let event = changed(&inner);
        drop(inner);

        tracing::info!("Mock health device disconnected");
        events::publish(&self.events, event);
    }

    /// Simulate a sync.
    ///
    /// Only `last_synced_at` moves; it always moves strictly forward, even
    /// when two syncs land within the clock's resolution.
    pub async fn sync(&self) -> SyncResult {
        self.latency.wait().await;

        let mut inner = self.inner.write().await;
        let previous = inner.snapshot.last_synced_at;
        let now = Utc::now();
        inner.snapshot.last_synced_at = if now > previous {
            now
        } else {
            previous + Duration::milliseconds(1)
        };
        let synced_at = inner.snapshot.last_synced_at;
        let event = changed(&inner);
        drop(inner);

        tracing::info!(%synced_at, "Mock health data synced");
        events::publish(&self.events, event);
        SyncResult::ok()
    }

    pub async fn snapshot(&self) -> HealthSnapshot {
        self.inner.read().await.snapshot.clone()
    }

    pub async fn is_connected(&self) -> bool {
        self.inner.read().await.connected
    }

    pub async fn metric_cards(&self) -> Vec<MetricCard> {
        self.inner.read().await.snapshot.metric_cards()
    }

    pub fn recent_activities(&self) -> Vec<ActivityEntry> {
        recent_activities()
    }

    /// Subscribe to health change events
    pub fn subscribe(&self) -> broadcast::Receiver<DemoEvent> {
        self.events.subscribe()
    }
}

fn changed(inner: &Inner) -> DemoEvent {
    DemoEvent::HealthChanged {
        snapshot: inner.snapshot.clone(),
        connected: inner.connected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latency::Immediate;

    fn health() -> HealthState {
        HealthState::new(Arc::new(Immediate))
    }

    #[tokio::test]
    async fn test_sync_keeps_metrics_and_advances_timestamp() {
        let health = health();
        let before = health.snapshot().await;

        let result = health.sync().await;
        assert!(result.success);
        assert_eq!(result.message, "Data synced successfully");

        let after = health.snapshot().await;
        assert_eq!(after.steps, before.steps);
        assert_eq!(after.heart_rate, before.heart_rate);
        assert_eq!(after.sleep_hours, before.sleep_hours);
        assert_eq!(after.water_glasses, before.water_glasses);
        assert_eq!(after.points, before.points);
        assert!(after.last_synced_at > before.last_synced_at);
    }

    #[tokio::test]
    async fn test_back_to_back_syncs_are_ordered() {
        let health = health();
        health.sync().await;
        let first = health.snapshot().await.last_synced_at;
        health.sync().await;
        let second = health.snapshot().await.last_synced_at;
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_connect_and_disconnect() {
        let health = health();
        assert!(health.is_connected().await);

        health.disconnect().await;
        assert!(!health.is_connected().await);

        health.connect().await;
        assert!(health.is_connected().await);
    }

    #[tokio::test]
    async fn test_sync_publishes_event() {
        let health = health();
        let mut rx = health.subscribe();

        health.sync().await;

        match rx.recv().await.unwrap() {
            DemoEvent::HealthChanged { connected, .. } => assert!(connected),
            other => panic!("Expected HealthChanged, got {:?}", other),
        }
    }
}
