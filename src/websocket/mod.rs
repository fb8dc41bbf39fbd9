//! WebSocket State Stream
//!
//! Pushes demo state changes to open pages so every tab sees the same
//! wallet, health and assistant state.
//!
//! ## Architecture
//!
//! - **ConnectionHub**: Manages all active connections and subscriptions
//! - **Handler**: Handles WebSocket upgrade and message processing
//! - **Messages**: Defines client and server message formats
//!
//! ## Topics
//!
//! - `wallet` - Wallet connected or disconnected
//! - `health` - Device paired, forgotten or synced
//! - `assistant` - Messages, typing indicator, symptom checker results
//! - `*` - Everything
//!
//! ## Example
//!
//! ```javascript
//! const ws = new WebSocket('ws://localhost:8084/ws');
//!
//! ws.onopen = () => {
//!   ws.send(JSON.stringify({type: 'subscribe', topics: ['assistant']}));
//! };
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   console.log('Received:', msg);
//! };
//! ```

mod handler;
mod hub;
mod messages;

pub use handler::websocket_handler;
pub use hub::{ConnectionHub, ConnectionId, HubConfig, HubError, WILDCARD};
pub use messages::{ClientMessage, ServerMessage, WsEvent, TOPICS};
