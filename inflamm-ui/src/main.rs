//! InflammAI Site
//!
//! Landing page and demo shell built with Leptos (WASM).
//!
//! # Features
//!
//! - Marketing landing page
//! - Demo shell: mock wallet, health dashboard, assistant chat and symptom checker
//! - WebSocket live updates, so every open tab shows the same demo state
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every demo control calls the InflammAI JSON API under
//! `/api/v1`, and the `/ws` stream keeps the signals current.

use leptos::*;

mod api;
mod app;
mod components;
mod content;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
