//! WebSocket Message Types
//!
//! Defines all message types for WebSocket communication between
//! demo pages and the server.

use serde::{Deserialize, Serialize};

use crate::events::DemoEvent;

/// Topics a client may subscribe to
pub const TOPICS: [&str; 3] = ["wallet", "health", "assistant"];

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Subscribe to topics for state updates
    Subscribe {
        /// Topics to subscribe to ("wallet", "health", "assistant", or "*")
        topics: Vec<String>,
    },
    /// Unsubscribe from topics
    Unsubscribe {
        /// Topics to unsubscribe from
        topics: Vec<String>,
    },
    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// A demo holder changed state
    Event {
        /// Topic the event was published on
        topic: String,
        /// The change itself
        event: DemoEvent,
    },
    /// Subscription confirmed
    Subscribed {
        /// Topics successfully subscribed to
        topics: Vec<String>,
    },
    /// Unsubscription confirmed
    Unsubscribed {
        /// Topics successfully unsubscribed from
        topics: Vec<String>,
    },
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
    /// Connection established
    Connected {
        /// Unique connection identifier
        connection_id: String,
    },
}

/// Internal event for broadcasting through the hub
#[derive(Debug, Clone)]
pub struct WsEvent {
    /// Topic this event belongs to
    pub topic: String,
    /// The message to send to subscribers
    pub message: ServerMessage,
}

impl From<DemoEvent> for WsEvent {
    fn from(event: DemoEvent) -> Self {
        let topic = event.topic().to_string();
        Self {
            topic: topic.clone(),
            message: ServerMessage::Event { topic, event },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_deserialize_subscribe() {
        let json = r#"{"type": "subscribe", "topics": ["wallet", "assistant"]}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        match msg {
            ClientMessage::Subscribe { topics } => {
                assert_eq!(topics.len(), 2);
                assert_eq!(topics[0], "wallet");
            }
            _ => panic!("Expected Subscribe"),
        }
    }

    #[test]
    fn test_client_message_deserialize_ping() {
        let json = r#"{"type": "ping"}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(msg, ClientMessage::Ping));
    }

    #[test]
    fn test_server_message_serialize_event() {
        let msg: WsEvent = DemoEvent::TypingChanged { is_typing: true }.into();
        assert_eq!(msg.topic, "assistant");

        let json = serde_json::to_string(&msg.message).unwrap();
        assert!(json.contains("\"type\":\"event\""));
        assert!(json.contains("\"topic\":\"assistant\""));
        assert!(json.contains("\"kind\":\"typing_changed\""));
    }

    #[test]
    fn test_server_message_serialize_connected() {
        let msg = ServerMessage::Connected {
            connection_id: "abc-123".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"connected\""));
        assert!(json.contains("\"connection_id\":\"abc-123\""));
    }
}
