//! Mock Health Data
//!
//! A single health snapshot seeded with demo values. Connecting and syncing
//! wait on the configured latency; syncing only refreshes the last-synced
//! timestamp.

mod snapshot;
mod state;

pub use snapshot::{recent_activities, ActivityEntry, HealthSnapshot, MetricCard, SyncResult};
pub use state::HealthState;
