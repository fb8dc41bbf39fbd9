//! Health snapshot and dashboard read models

use chrono::{DateTime, Utc};
use serde::Serialize;

const SLEEP_TARGET_HOURS: f64 = 8.0;
const WATER_TARGET_GLASSES: u32 = 8;
const HEART_RATE_RANGE: (u32, u32) = (60, 100);
/// Points are averaged over a fixed 30-day window
const POINTS_WINDOW_DAYS: u64 = 30;

/// Current health metrics. One mutable record, not a history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthSnapshot {
    pub steps: u32,
    pub sleep_hours: f64,
    pub heart_rate: u32,
    pub water_glasses: u32,
    pub calories: u32,
    pub daily_step_goal: u32,
    pub points: u64,
    pub last_synced_at: DateTime<Utc>,
}

impl HealthSnapshot {
    /// The fixed demo values, stamped as synced at `now`
    pub fn demo(now: DateTime<Utc>) -> Self {
        Self {
            steps: 8452,
            sleep_hours: 7.5,
            heart_rate: 72,
            water_glasses: 6,
            calories: 2100,
            daily_step_goal: 10_000,
            points: 15_000,
            last_synced_at: now,
        }
    }

    /// Total points spread over the averaging window, rounded half up
    pub fn daily_average_points(&self) -> u64 {
        (self.points + POINTS_WINDOW_DAYS / 2) / POINTS_WINDOW_DAYS
    }

    /// Metric cards as shown on the dashboard
    pub fn metric_cards(&self) -> Vec<MetricCard> {
        let (low, high) = HEART_RATE_RANGE;
        vec![
            MetricCard {
                name: "Steps",
                value: group_thousands(self.steps as u64),
                target: group_thousands(self.daily_step_goal as u64),
                unit: "steps",
                progress_percent: percent(self.steps as f64, self.daily_step_goal as f64),
            },
            MetricCard {
                name: "Sleep",
                value: format!("{}", self.sleep_hours),
                target: format!("{}", SLEEP_TARGET_HOURS),
                unit: "hours",
                progress_percent: percent(self.sleep_hours, SLEEP_TARGET_HOURS),
            },
            MetricCard {
                name: "Heart Rate",
                value: self.heart_rate.to_string(),
                target: format!("{}-{}", low, high),
                unit: "bpm",
                progress_percent: heart_rate_progress(self.heart_rate),
            },
            MetricCard {
                name: "Water Intake",
                value: self.water_glasses.to_string(),
                target: WATER_TARGET_GLASSES.to_string(),
                unit: "glasses",
                progress_percent: percent(
                    self.water_glasses as f64,
                    WATER_TARGET_GLASSES as f64,
                ),
            },
        ]
    }
}

/// One dashboard tile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub name: &'static str,
    pub value: String,
    pub target: String,
    pub unit: &'static str,
    pub progress_percent: u8,
}

/// A line in the recent-activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub time: &'static str,
    pub activity: &'static str,
    pub points: u32,
}

/// Fixed activity feed for the dashboard
pub fn recent_activities() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            time: "10:30 AM",
            activity: "Morning walk",
            points: 50,
        },
        ActivityEntry {
            time: "12:15 PM",
            activity: "Lunch logged",
            points: 10,
        },
        ActivityEntry {
            time: "3:45 PM",
            activity: "Workout completed",
            points: 100,
        },
        ActivityEntry {
            time: "7:30 PM",
            activity: "Meditation",
            points: 30,
        },
    ]
}

/// Result of a mock sync
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncResult {
    pub success: bool,
    pub message: String,
}

impl SyncResult {
    pub(crate) fn ok() -> Self {
        Self {
            success: true,
            message: "Data synced successfully".to_string(),
        }
    }
}

fn percent(value: f64, target: f64) -> u8 {
    if target <= 0.0 {
        return 0;
    }
    (value / target * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Full marks inside the healthy range, scaled by distance outside it
fn heart_rate_progress(bpm: u32) -> u8 {
    let (low, high) = HEART_RATE_RANGE;
    if (low..=high).contains(&bpm) {
        100
    } else if bpm < low {
        percent(bpm as f64, low as f64)
    } else {
        percent(high as f64, bpm as f64)
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
