//! WebSocket Client
//!
//! Real-time connection to the InflammAI `/ws` stream. Subscribes to every
//! demo topic on open and applies the pushed events to the global signals.

use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use super::global::GlobalState;
use super::sync;
use super::types::DemoEvent;

/// Topics the demo shell follows
pub const DEMO_TOPICS: [&str; 3] = ["wallet", "health", "assistant"];

const MAX_RECONNECT_ATTEMPTS: u32 = 5;
const PING_INTERVAL_MS: u32 = 30_000;

/// WebSocket message types from server
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    Connected { connection_id: String },
    Event { topic: String, event: DemoEvent },
    Subscribed { topics: Vec<String> },
    Unsubscribed { topics: Vec<String> },
    Pong,
    Error { message: String },
}

/// WebSocket client message types
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Subscribe { topics: Vec<String> },
    Ping,
}

impl ClientMessage {
    pub fn subscribe_demo() -> Self {
        ClientMessage::Subscribe {
            topics: DEMO_TOPICS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// WebSocket client for real-time updates
#[derive(Clone)]
pub struct WebSocketClient {
    ws: Rc<RefCell<Option<WebSocket>>>,
    url: String,
    reconnect_attempts: Rc<Cell<u32>>,
}

impl WebSocketClient {
    /// Create a new WebSocket client
    pub fn new(url: &str) -> Self {
        Self {
            ws: Rc::new(RefCell::new(None)),
            url: url.to_string(),
            reconnect_attempts: Rc::new(Cell::new(0)),
        }
    }

    /// Connect to the WebSocket server
    pub fn connect(&self, state: GlobalState) {
        match WebSocket::new(&self.url) {
            Ok(ws) => {
                self.setup_handlers(&ws, state);
                *self.ws.borrow_mut() = Some(ws);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("WebSocket connection failed: {:?}", e).into());
                self.schedule_reconnect(state);
            }
        }
    }

    /// Set up WebSocket event handlers
    fn setup_handlers(&self, ws: &WebSocket, state: GlobalState) {
        // On open: subscribe, and after a reconnect catch up on what was missed
        let client = self.clone();
        let on_open = Closure::wrap(Box::new(move |_: JsValue| {
            web_sys::console::log_1(&"WebSocket connected".into());
            state.ws_connected.set(true);
            let reconnected = client.reconnect_attempts.replace(0) > 0;

            if let Err(e) = client.send(&ClientMessage::subscribe_demo()) {
                web_sys::console::error_1(&format!("Subscribe failed: {}", e).into());
            }
            if reconnected {
                sync::load_all(state);
            }
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        on_open.forget();

        // On message
        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            if let Ok(text) = event.data().dyn_into::<js_sys::JsString>() {
                let text_str: String = text.into();
                handle_message(&text_str, state);
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        on_message.forget();

        // On close
        let client = self.clone();
        let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
            web_sys::console::log_1(
                &format!(
                    "WebSocket closed: code={}, reason={}",
                    event.code(),
                    event.reason()
                )
                .into(),
            );
            state.ws_connected.set(false);
            client.schedule_reconnect(state);
        }) as Box<dyn FnMut(CloseEvent)>);
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));
        on_close.forget();

        // On error
        let on_error = Closure::wrap(Box::new(move |e: JsValue| {
            web_sys::console::error_1(&format!("WebSocket error: {:?}", e).into());
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();
    }

    /// Schedule a reconnect attempt with exponential backoff
    fn schedule_reconnect(&self, state: GlobalState) {
        let attempts = self.reconnect_attempts.get();
        if attempts >= MAX_RECONNECT_ATTEMPTS {
            web_sys::console::error_1(&"Max reconnect attempts reached".into());
            return;
        }
        self.reconnect_attempts.set(attempts + 1);

        let client = self.clone();
        gloo_timers::callback::Timeout::new(reconnect_delay_ms(attempts), move || {
            web_sys::console::log_1(
                &format!("Attempting reconnect (attempt {})", attempts + 1).into(),
            );
            client.connect(state);
        })
        .forget();
    }

    /// Send a message to the server
    pub fn send(&self, message: &ClientMessage) -> Result<(), String> {
        let ws_guard = self.ws.borrow();
        let ws = ws_guard.as_ref().ok_or("WebSocket not connected")?;
        if ws.ready_state() != WebSocket::OPEN {
            return Err("WebSocket not open".to_string());
        }

        let json = serde_json::to_string(message).map_err(|e| e.to_string())?;
        ws.send_with_str(&json).map_err(|e| format!("{:?}", e))
    }
}

/// Backoff before reconnect attempt `attempts + 1`: 1s, 2s, 4s... capped at 30s
pub fn reconnect_delay_ms(attempts: u32) -> u32 {
    2_u32
        .saturating_pow(attempts)
        .saturating_mul(1000)
        .min(30_000)
}

/// Handle incoming WebSocket message
fn handle_message(text: &str, state: GlobalState) {
    match serde_json::from_str::<WsMessage>(text) {
        Ok(msg) => match msg {
            WsMessage::Connected { connection_id } => {
                web_sys::console::log_1(&format!("Connected with ID: {}", connection_id).into());
            }
            WsMessage::Event { topic, event } => {
                if let Some(what) = state.apply_event(event) {
                    spawn_local(sync::refresh(state, what));
                }
                web_sys::console::debug_1(&format!("Applied {} event", topic).into());
            }
            WsMessage::Subscribed { topics } => {
                web_sys::console::log_1(&format!("Subscribed to: {:?}", topics).into());
            }
            WsMessage::Unsubscribed { topics } => {
                web_sys::console::log_1(&format!("Unsubscribed from: {:?}", topics).into());
            }
            WsMessage::Pong => {
                // Connection alive
            }
            WsMessage::Error { message } => {
                web_sys::console::error_1(&format!("Server error: {}", message).into());
                state.show_error(&message);
            }
        },
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to parse WebSocket message: {}", e).into());
        }
    }
}

/// Stream URL for an API base. A relative base means the page's own server.
pub fn ws_url(api_base: &str, page_protocol: &str, page_host: &str) -> String {
    for (http, ws) in [("https://", "wss://"), ("http://", "ws://")] {
        if let Some(rest) = api_base.strip_prefix(http) {
            let host = rest.split('/').next().unwrap_or(rest);
            return format!("{}{}/ws", ws, host);
        }
    }

    let scheme = if page_protocol == "https:" { "wss" } else { "ws" };
    format!("{}://{}/ws", scheme, page_host)
}

/// Initialize WebSocket connection (call from app root)
pub fn init_websocket(state: GlobalState, api_base: &str) {
    let location = web_sys::window().map(|w| w.location());
    let protocol = location
        .as_ref()
        .and_then(|l| l.protocol().ok())
        .unwrap_or_default();
    let host = location
        .as_ref()
        .and_then(|l| l.host().ok())
        .unwrap_or_default();

    let client = WebSocketClient::new(&ws_url(api_base, &protocol, &host));
    client.connect(state);

    // Keepalive; a failed ping just means the socket is between reconnects
    gloo_timers::callback::Interval::new(PING_INTERVAL_MS, move || {
        let _ = client.send(&ClientMessage::Ping);
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_frame() {
        let json = serde_json::to_string(&ClientMessage::subscribe_demo()).unwrap();
        assert_eq!(
            json,
            r#"{"type":"subscribe","topics":["wallet","health","assistant"]}"#
        );
        assert_eq!(
            serde_json::to_string(&ClientMessage::Ping).unwrap(),
            r#"{"type":"ping"}"#
        );
    }

    #[test]
    fn test_event_frame_parses() {
        let json = r#"{"type":"event","topic":"assistant","event":{"kind":"typing_changed","is_typing":true}}"#;
        match serde_json::from_str::<WsMessage>(json).unwrap() {
            WsMessage::Event { topic, event } => {
                assert_eq!(topic, "assistant");
                assert_eq!(event, DemoEvent::TypingChanged { is_typing: true });
            }
            other => panic!("Expected Event, got {:?}", other),
        }
    }

    #[test]
    fn test_ws_url_same_origin() {
        assert_eq!(
            ws_url("/api/v1", "http:", "localhost:8084"),
            "ws://localhost:8084/ws"
        );
        assert_eq!(
            ws_url("/api/v1", "https:", "inflamm.ai"),
            "wss://inflamm.ai/ws"
        );
    }

    #[test]
    fn test_ws_url_absolute_base() {
        assert_eq!(
            ws_url("http://localhost:8084/api/v1", "https:", "ignored"),
            "ws://localhost:8084/ws"
        );
        assert_eq!(
            ws_url("https://demo.inflamm.ai/api/v1", "http:", "ignored"),
            "wss://demo.inflamm.ai/ws"
        );
    }

    #[test]
    fn test_reconnect_delay() {
        assert_eq!(reconnect_delay_ms(0), 1000);
        assert_eq!(reconnect_delay_ms(3), 8000);
        assert_eq!(reconnect_delay_ms(5), 30_000);
        assert_eq!(reconnect_delay_ms(40), 30_000);
    }
}
