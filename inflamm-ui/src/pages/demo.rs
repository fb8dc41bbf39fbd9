//! Demo Page
//!
//! Mock wallet, health dashboard and assistant, all backed by the server's
//! demo holders.

use leptos::*;

use crate::components::{AiChat, HealthDashboard, WalletButton};
use crate::state::global::GlobalState;
use crate::state::sync;

#[component]
pub fn Demo() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Load once on mount; the stream keeps things current afterwards
    create_effect(move |_| {
        sync::load_all(state);
    });

    view! {
        <div class="bg-gray-50 min-h-full">
            <div class="container mx-auto px-4 py-8">
                <div class="flex items-center justify-between mb-8">
                    <div>
                        <h1 class="text-3xl font-bold">"InflammAI Demo"</h1>
                        <p class="text-gray-500">"Everything here is simulated. No real wallet or device is used."</p>
                    </div>
                    <WalletButton />
                </div>

                <div class="grid gap-8 lg:grid-cols-2">
                    <HealthDashboard />
                    <AiChat />
                </div>
            </div>
        </div>
    }
}
