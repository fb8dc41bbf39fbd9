//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::assistant::{ChatMessage, Condition, Symptom};
use crate::health::{ActivityEntry, HealthSnapshot, MetricCard};
use crate::wallet::WalletSession;

// ============================================
// WALLET DTOs
// ============================================

/// Wallet session plus display helpers
#[derive(Debug, Serialize)]
pub struct WalletResponse {
    #[serde(flatten)]
    pub session: WalletSession,
    /// Shortened address for display
    pub short_address: Option<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full dashboard payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub connected: bool,
    pub snapshot: HealthSnapshot,
    /// Points averaged over the last 30 days
    pub daily_average_points: u64,
    pub cards: Vec<MetricCard>,
    pub recent_activities: Vec<ActivityEntry>,
}

/// Sync result
#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub success: bool,
    pub message: String,
    /// RFC 3339 timestamp of the new last-synced time
    pub last_synced_at: String,
}

// ============================================
// ASSISTANT DTOs
// ============================================

/// Send message request
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

/// Send message response
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub user: ChatMessage,
    /// Absent when the conversation was cleared before the reply landed
    pub reply: Option<ChatMessage>,
}

/// Transcript
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub messages: Vec<ChatMessage>,
    pub is_typing: bool,
}

/// Add symptom request
#[derive(Debug, Deserialize)]
pub struct AddSymptomRequest {
    pub name: String,
}

/// Symptom checker state
#[derive(Debug, Serialize)]
pub struct SymptomsResponse {
    pub symptoms: Vec<Symptom>,
    pub conditions: Vec<Condition>,
}

// ============================================
// STATUS DTOs
// ============================================

/// Service status
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub mode: String,
    pub uptime_seconds: u64,
    pub ws_connections: usize,
    pub version: String,
}
