//! Demo Read Models
//!
//! Client-side shapes of what the InflammAI API and WebSocket stream send.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Network the mock wallet reports
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NetworkInfo {
    pub name: String,
    pub chain_id: u64,
}

/// Mock wallet connection
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WalletSession {
    pub address: Option<String>,
    pub balance_display: String,
    pub connected: bool,
    pub network: Option<NetworkInfo>,
}

impl Default for WalletSession {
    fn default() -> Self {
        Self {
            address: None,
            balance_display: "0".to_string(),
            connected: false,
            network: None,
        }
    }
}

impl WalletSession {
    /// `0x1234...5678`, or the address itself when too short to shorten
    pub fn short_address(&self) -> Option<String> {
        let address = self.address.as_deref()?;
        if address.len() <= 10 || !address.is_ascii() {
            return Some(address.to_string());
        }
        Some(format!("{}...{}", &address[..6], &address[address.len() - 4..]))
    }

    /// Two-character avatar badge
    pub fn avatar_initials(&self) -> Option<String> {
        self.address
            .as_deref()
            .and_then(|a| a.get(2..4))
            .map(|s| s.to_uppercase())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
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

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MetricCard {
    pub name: String,
    pub value: String,
    pub target: String,
    pub unit: String,
    pub progress_percent: u8,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ActivityEntry {
    pub time: String,
    pub activity: String,
    pub points: u32,
}

/// `GET /api/v1/health`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HealthView {
    pub connected: bool,
    pub snapshot: HealthSnapshot,
    pub daily_average_points: u64,
    pub cards: Vec<MetricCard>,
    pub recent_activities: Vec<ActivityEntry>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Symptom {
    pub id: String,
    pub name: String,
    pub severity: String,
    pub duration: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Likelihood {
    Low,
    Medium,
    High,
}

impl Likelihood {
    pub fn label(&self) -> &'static str {
        match self {
            Likelihood::Low => "Low",
            Likelihood::Medium => "Medium",
            Likelihood::High => "High",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Condition {
    pub id: String,
    pub name: String,
    pub likelihood: Likelihood,
    pub description: String,
    pub recommendations: Vec<String>,
}

/// A change pushed by one of the server's demo holders
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DemoEvent {
    WalletChanged {
        session: WalletSession,
    },
    HealthChanged {
        snapshot: HealthSnapshot,
        connected: bool,
    },
    MessageAppended {
        message: ChatMessage,
    },
    TypingChanged {
        is_typing: bool,
    },
    ConversationCleared {
        messages: Vec<ChatMessage>,
    },
    ConditionsChanged {
        conditions: Vec<Condition>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_response_parses() {
        let json = r#"{
            "address": "0x1234567890abcdef1234567890abcdef12345678",
            "balance_display": "1,000.00",
            "connected": true,
            "network": {"name": "demo", "chain_id": 1},
            "short_address": "0x1234...5678"
        }"#;
        let session: WalletSession = serde_json::from_str(json).unwrap();
        assert!(session.connected);
        assert_eq!(session.short_address().as_deref(), Some("0x1234...5678"));
        assert_eq!(session.avatar_initials().as_deref(), Some("12"));
    }

    #[test]
    fn test_disconnected_wallet() {
        let session = WalletSession::default();
        assert!(session.short_address().is_none());
        assert!(session.avatar_initials().is_none());
    }

    #[test]
    fn test_health_view_parses() {
        let json = r#"{
            "connected": true,
            "snapshot": {
                "steps": 8452, "sleep_hours": 7.5, "heart_rate": 72,
                "water_glasses": 6, "calories": 2100, "daily_step_goal": 10000,
                "points": 15000, "last_synced_at": "2026-10-19T08:30:00Z"
            },
            "daily_average_points": 500,
            "cards": [{"name": "Steps", "value": "8,452", "target": "10,000", "unit": "steps", "progress_percent": 85}],
            "recent_activities": [{"time": "10:30 AM", "activity": "Morning walk", "points": 50}]
        }"#;
        let view: HealthView = serde_json::from_str(json).unwrap();
        assert_eq!(view.snapshot.points, 15_000);
        assert_eq!(view.daily_average_points, 500);
        assert_eq!(view.cards[0].progress_percent, 85);
    }

    #[test]
    fn test_conditions_event_parses() {
        let json = r#"{
            "kind": "conditions_changed",
            "conditions": [{
                "id": "3", "name": "Migraine", "likelihood": "medium",
                "description": "Recurrent headache that can cause severe throbbing pain.",
                "recommendations": ["Rest in a quiet, dark room"]
            }]
        }"#;
        match serde_json::from_str::<DemoEvent>(json).unwrap() {
            DemoEvent::ConditionsChanged { conditions } => {
                assert_eq!(conditions[0].likelihood, Likelihood::Medium);
                assert_eq!(conditions[0].recommendations.len(), 1);
            }
            other => panic!("Expected ConditionsChanged, got {:?}", other),
        }
    }
}
