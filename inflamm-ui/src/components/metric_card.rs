//! Metric Card Component
//!
//! One dashboard tile: value against target with a progress bar.

use leptos::*;

use crate::state::types::MetricCard as Card;

#[component]
pub fn MetricCard(card: Card) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 p-4">
            <p class="text-sm text-gray-500">{card.name}</p>
            <p class="mt-1 text-2xl font-bold">
                {card.value}
                <span class="ml-1 text-sm font-normal text-gray-500">
                    {format!("/ {} {}", card.target, card.unit)}
                </span>
            </p>
            <div class="mt-3 h-2 rounded-full bg-gray-100">
                <div
                    class="h-2 rounded-full bg-orange-500"
                    style=format!("width: {}%", card.progress_percent)
                />
            </div>
        </div>
    }
}
