//! # InflammAI
//!
//! Server for a health-data product's marketing site and demo shell. The
//! demo widgets are backed by three independent in-memory holders that
//! simulate a wallet connection, a health device and an AI assistant with
//! artificial latency. The pages themselves are the `inflamm-ui` Leptos
//! client, which this server serves and drives through `/api/v1` and `/ws`.
//!
//! ## Features
//!
//! - **Mock wallet**: connect/disconnect flow with a fixed demo account
//! - **Mock health dashboard**: fixed metrics with a simulated sync
//! - **Mock assistant**: keyword-matched canned replies and a symptom checker
//! - **Real-time**: WebSocket stream of state changes for open demo pages
//!
//! ## Modules
//!
//! - [`wallet`]: Simulated wallet session
//! - [`health`]: Simulated health snapshot
//! - [`assistant`]: Conversation engine and symptom checker
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use inflamm::assistant::ConversationEngine;
//! use inflamm::latency::Immediate;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = ConversationEngine::new(Arc::new(Immediate));
//!
//!     let outcome = engine.send_message("How many steps have I done?").await?;
//!     if let Some(reply) = outcome.reply {
//!         println!("{}", reply.text);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod assistant;
pub mod config;
pub mod events;
pub mod health;
pub mod latency;
pub mod logging;
pub mod wallet;
pub mod websocket;

// Re-export top-level types for convenience
pub use wallet::{WalletSession, WalletState};

pub use health::{HealthSnapshot, HealthState, SyncResult};

pub use assistant::{
    AssistantError, AssistantResult, ChatMessage, ConversationEngine, SendOutcome, Sender,
    SymptomChecker,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use events::DemoEvent;

pub use latency::{FixedDelay, Immediate, Latency, SharedLatency};

pub use config::{Config, ConfigError, DemoConfig, LoggingConfig, Mode, ServerConfig};
