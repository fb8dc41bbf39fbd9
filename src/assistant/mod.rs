//! Mock Assistant
//!
//! A canned-response chat engine and a symptom checker. Replies are picked
//! by keyword, or at random when nothing matches; conditions are drawn at
//! random from a small catalogue. Nothing here does real language
//! processing or diagnosis.
//!
//! ## Modules
//!
//! - [`responder`]: pure reply selection
//! - [`engine`]: the conversation state machine (Idle / AwaitingReply)
//! - [`symptoms`]: the symptom checker side panel

pub mod engine;
pub mod error;
pub mod message;
pub mod random;
pub mod responder;
pub mod symptoms;

pub use engine::{ConversationEngine, SendOutcome};
pub use error::{AssistantError, AssistantResult};
pub use message::{ChatMessage, Sender, GREETING};
pub use random::{RandomSource, StdRandom};
pub use responder::generate_reply;
pub use symptoms::{Condition, Likelihood, Symptom, SymptomChecker, SymptomUpdate, CONDITIONS};
