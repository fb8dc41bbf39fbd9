//! UI Components
//!
//! Landing page sections and demo widgets.

pub mod ai_chat;
pub mod call_to_action;
pub mod features;
pub mod footer;
pub mod health_dashboard;
pub mod hero;
pub mod metric_card;
pub mod nav;
pub mod pathways;
pub mod symptom_checker;
pub mod toast;
pub mod wallet_button;

pub use ai_chat::AiChat;
pub use call_to_action::CallToAction;
pub use features::{FeatureGrid, WhatIs};
pub use footer::SiteFooter;
pub use health_dashboard::HealthDashboard;
pub use hero::Hero;
pub use nav::Nav;
pub use pathways::Pathways;
pub use toast::Toast;
pub use wallet_button::WalletButton;
