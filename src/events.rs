//! Change Events
//!
//! Each state holder publishes a [`DemoEvent`] after it mutates, so the
//! presentation layer can re-render from the new state.

use serde::Serialize;
use tokio::sync::broadcast;

use crate::assistant::{ChatMessage, Condition};
use crate::health::HealthSnapshot;
use crate::wallet::WalletSession;

/// Capacity of each holder's event channel
pub const EVENT_CAPACITY: usize = 256;

/// A state change in one of the demo holders
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DemoEvent {
    /// The wallet session was replaced
    WalletChanged { session: WalletSession },
    /// The health snapshot or its connection flag changed
    HealthChanged {
        snapshot: HealthSnapshot,
        connected: bool,
    },
    /// A message was appended to the conversation
    MessageAppended { message: ChatMessage },
    /// The assistant started or stopped "typing"
    TypingChanged { is_typing: bool },
    /// The conversation was reset to its greeting
    ConversationCleared { messages: Vec<ChatMessage> },
    /// The symptom checker produced a new set of conditions
    ConditionsChanged { conditions: Vec<Condition> },
}

impl DemoEvent {
    /// Topic used for routing to WebSocket subscribers
    pub fn topic(&self) -> &'static str {
        match self {
            DemoEvent::WalletChanged { .. } => "wallet",
            DemoEvent::HealthChanged { .. } => "health",
            DemoEvent::MessageAppended { .. }
            | DemoEvent::TypingChanged { .. }
            | DemoEvent::ConversationCleared { .. }
            | DemoEvent::ConditionsChanged { .. } => "assistant",
        }
    }
}

/// Create the sending half of a holder's event channel
pub fn channel() -> broadcast::Sender<DemoEvent> {
    let (tx, _) = broadcast::channel(EVENT_CAPACITY);
    tx
}

/// Publish an event, ignoring the case where nobody is listening
pub(crate) fn publish(tx: &broadcast::Sender<DemoEvent>, event: DemoEvent) {
    let topic = event.topic();
    if tx.send(event).is_err() {
        tracing::trace!(topic, "No subscribers for demo event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics() {
        let event = DemoEvent::TypingChanged { is_typing: true };
        assert_eq!(event.topic(), "assistant");

        let event = DemoEvent::WalletChanged {
            session: WalletSession::disconnected(),
        };
        assert_eq!(event.topic(), "wallet");
    }

    #[test]
    fn test_serialize_tagged() {
        let event = DemoEvent::TypingChanged { is_typing: false };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"kind\":\"typing_changed\""));
        assert!(json.contains("\"is_typing\":false"));
    }

    #[tokio::test]
    async fn test_publish_reaches_subscriber() {
        let tx = channel();
        let mut rx = tx.subscribe();
        publish(&tx, DemoEvent::TypingChanged { is_typing: true });
        let event = rx.recv().await.unwrap();
        assert!(matches!(event, DemoEvent::TypingChanged { is_typing: true }));
    }

    #[test]
    fn test_publish_without_subscribers() {
        let tx = channel();
        publish(&tx, DemoEvent::TypingChanged { is_typing: true });
    }
}
