//! State Management
//!
//! Global application state, the fetches that fill it, and the WebSocket
//! connection that keeps it current.

pub mod global;
pub mod sync;
pub mod types;
pub mod websocket;

pub use global::{provide_global_state, GlobalState, Refresh};
