//! Global Application State
//!
//! Reactive state management using Leptos signals. The signals mirror the
//! server's demo holders; they are filled by `/api/v1` responses and kept
//! current by the `/ws` stream.

use leptos::*;

use super::types::{ChatMessage, Condition, DemoEvent, HealthView, Symptom, WalletSession};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    pub wallet: RwSignal<WalletSession>,
    /// `None` until the dashboard has loaded
    pub health: RwSignal<Option<HealthView>>,
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub is_typing: RwSignal<bool>,
    pub symptoms: RwSignal<Vec<Symptom>>,
    pub conditions: RwSignal<Vec<Condition>>,
    /// WebSocket connection status
    pub ws_connected: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Part of the state an event leaves stale, to be fetched again
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refresh {
    /// Metric cards and averages are derived server-side from the snapshot
    Health,
    /// Condition events do not carry the symptom list
    Symptoms,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            wallet: create_rw_signal(WalletSession::default()),
            health: create_rw_signal(None),
            messages: create_rw_signal(Vec::new()),
            is_typing: create_rw_signal(false),
            symptoms: create_rw_signal(Vec::new()),
            conditions: create_rw_signal(Vec::new()),
            ws_connected: create_rw_signal(false),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    /// Apply a pushed change. Returns what still needs a fetch.
    pub fn apply_event(&self, event: DemoEvent) -> Option<Refresh> {
        match event {
            DemoEvent::WalletChanged { session } => {
                self.wallet.set(session);
                None
            }
            DemoEvent::HealthChanged {
                snapshot,
                connected,
            } => {
                self.health.update(|health| {
                    if let Some(health) = health {
                        health.snapshot = snapshot;
                        health.connected = connected;
                    }
                });
                Some(Refresh::Health)
            }
            DemoEvent::MessageAppended { message } => {
                self.push_message(message);
                None
            }
            DemoEvent::TypingChanged { is_typing } => {
                self.is_typing.set(is_typing);
                None
            }
            DemoEvent::ConversationCleared { messages } => {
                self.messages.set(messages);
                None
            }
            DemoEvent::ConditionsChanged { conditions } => {
                self.conditions.set(conditions);
                Some(Refresh::Symptoms)
            }
        }
    }

    /// Append a message unless it is already shown. The sending tab sees
    /// each message twice: in the POST response and on the stream.
    pub fn push_message(&self, message: ChatMessage) {
        self.messages.update(|messages| {
            if !messages.iter().any(|m| m.id == message.id) {
                messages.push(message);
            }
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::Sender;
    use chrono::Utc;

    fn message(id: &str, text: &str, sender: Sender) -> ChatMessage {
        ChatMessage {
            id: id.to_string(),
            text: text.to_string(),
            sender,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_wallet_event() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        let event: DemoEvent = serde_json::from_str(
            r#"{"kind": "wallet_changed", "session": {
                "address": "0x1234567890abcdef1234567890abcdef12345678",
                "balance_display": "1,000.00", "connected": true,
                "network": {"name": "demo", "chain_id": 1}}}"#,
        )
        .unwrap();
        assert_eq!(state.apply_event(event), None);
        assert!(state.wallet.get_untracked().connected);

        runtime.dispose();
    }

    #[test]
    fn test_message_appended_once() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        let hello = message("m1", "hello", Sender::User);
        state.push_message(hello.clone());
        state.apply_event(DemoEvent::MessageAppended { message: hello });
        state.apply_event(DemoEvent::MessageAppended {
            message: message("m2", "Hi there", Sender::Assistant),
        });

        let ids: Vec<String> = state
            .messages
            .get_untracked()
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["m1", "m2"]);

        runtime.dispose();
    }

    #[test]
    fn test_conversation_cleared() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        state.push_message(message("m1", "hello", Sender::User));
        state.apply_event(DemoEvent::TypingChanged { is_typing: true });

        state.apply_event(DemoEvent::ConversationCleared {
            messages: vec![message("g", "Hello!", Sender::Assistant)],
        });
        state.apply_event(DemoEvent::TypingChanged { is_typing: false });

        assert_eq!(state.messages.get_untracked().len(), 1);
        assert!(!state.is_typing.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_events_needing_refresh() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        assert_eq!(
            state.apply_event(DemoEvent::ConditionsChanged {
                conditions: Vec::new()
            }),
            Some(Refresh::Symptoms)
        );

        let event: DemoEvent = serde_json::from_str(
            r#"{"kind": "health_changed", "connected": false, "snapshot": {
                "steps": 8452, "sleep_hours": 7.5, "heart_rate": 72,
                "water_glasses": 6, "calories": 2100, "daily_step_goal": 10000,
                "points": 15000, "last_synced_at": "2026-10-19T08:30:00Z"}}"#,
        )
        .unwrap();
        assert_eq!(state.apply_event(event), Some(Refresh::Health));
        // Nothing loaded yet, so nothing to patch
        assert!(state.health.get_untracked().is_none());

        runtime.dispose();
    }
}
