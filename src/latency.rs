//! Simulated Latency
//!
//! Every mock action in the demo resolves after an artificial delay. The
//! delay is injected as a [`Latency`] so tests can swap the real timer for
//! [`Immediate`].

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// An artificial wait before a mock operation completes
#[async_trait]
pub trait Latency: Send + Sync {
    /// Suspend until the simulated work is "done"
    async fn wait(&self);
}

/// Shared handle to a latency implementation
pub type SharedLatency = Arc<dyn Latency>;

/// Sleeps on the tokio timer for a fixed duration
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    duration: Duration,
}

impl FixedDelay {
    /// Create a delay of the given duration
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Create a delay from milliseconds
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// The configured duration
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Wrap into a shared handle, collapsing a zero delay to [`Immediate`]
    pub fn shared(self) -> SharedLatency {
        if self.duration.is_zero() {
            Arc::new(Immediate)
        } else {
            Arc::new(self)
        }
    }
}

#[async_trait]
impl Latency for FixedDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.duration).await;
    }
}

/// Completes without waiting
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

#[async_trait]
impl Latency for Immediate {
    async fn wait(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_immediate_does_not_wait() {
        let start = Instant::now();
        Immediate.wait().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_fixed_delay_waits() {
        let delay = FixedDelay::from_millis(20);
        let start = Instant::now();
        delay.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_from_millis() {
        assert_eq!(
            FixedDelay::from_millis(1500).duration(),
            Duration::from_millis(1500)
        );
    }
}
