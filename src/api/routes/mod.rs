//! API Route Handlers
//!
//! Each module contains handlers for a specific resource.

pub mod assistant;
pub mod health;
pub mod pages;
pub mod status;
pub mod wallet;
