//! InflammAI API access

pub mod client;

pub use client::*;
