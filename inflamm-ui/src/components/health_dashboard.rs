//! Health Dashboard Component
//!
//! Metric cards, points summary, recent activity and the mock device
//! controls (`/api/v1/health/*`).

use leptos::*;

use super::metric_card::MetricCard;
use crate::api;
use crate::state::global::GlobalState;
use crate::state::sync;
use crate::state::Refresh;

#[component]
pub fn HealthDashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (syncing, set_syncing) = create_signal(false);

    let on_sync = move |_| {
        set_syncing.set(true);
        spawn_local(async move {
            match api::sync_health().await {
                Ok(result) if result.success => state.show_success(&result.message),
                Ok(result) => state.show_error(&result.message),
                Err(e) => state.show_error(&e),
            }
            sync::refresh(state, Refresh::Health).await;
            set_syncing.set(false);
        });
    };

    let on_connect = move |_| {
        spawn_local(async move {
            if let Err(e) = api::connect_health().await {
                state.show_error(&e);
            }
            sync::refresh(state, Refresh::Health).await;
        });
    };

    let on_disconnect = move |_| {
        spawn_local(async move {
            if let Err(e) = api::disconnect_health().await {
                state.show_error(&e);
            }
            sync::refresh(state, Refresh::Health).await;
        });
    };

    view! {
        <section class="rounded-xl bg-white shadow p-6">
            <h2 class="text-xl font-bold">"Health Dashboard"</h2>
            <p class="text-sm text-gray-500">"Your health data and activity summary"</p>

            {move || match state.health.get() {
                None => view! {
                    <div class="flex items-center justify-center py-12">
                        <div class="animate-spin w-8 h-8 border-4 border-orange-500 border-t-transparent rounded-full" />
                    </div>
                }
                .into_view(),
                Some(health) => view! {
                    <div class="mt-6 grid gap-4 sm:grid-cols-2">
                        {health
                            .cards
                            .into_iter()
                            .map(|card| view! { <MetricCard card=card /> })
                            .collect_view()}
                    </div>

                    <div class="mt-6 grid gap-6 md:grid-cols-2">
                        <div class="rounded-lg bg-orange-50 p-4">
                            <h3 class="font-semibold">"Health Points"</h3>
                            <p class="text-sm text-gray-600">
                                "Track your health data points and see how they contribute to your overall wellness."
                            </p>
                            <dl class="mt-3 space-y-1 text-sm">
                                <div class="flex justify-between">
                                    <dt>"Total Points Earned"</dt>
                                    <dd class="font-bold">{group_thousands(health.snapshot.points)}</dd>
                                </div>
                                <div class="flex justify-between">
                                    <dt>"Daily Average"</dt>
                                    <dd class="font-bold">{group_thousands(health.daily_average_points)}</dd>
                                </div>
                            </dl>
                        </div>

                        <div>
                            <h3 class="font-semibold">"Recent Activity"</h3>
                            <ol class="mt-2 space-y-1 text-sm">
                                {health
                                    .recent_activities
                                    .into_iter()
                                    .map(|entry| view! {
                                        <li class="flex justify-between">
                                            <span>
                                                <time class="text-gray-500 mr-2">{entry.time}</time>
                                                {entry.activity}
                                            </span>
                                            <span class="text-green-600">{format!("+{} pts", entry.points)}</span>
                                        </li>
                                    })
                                    .collect_view()}
                            </ol>
                        </div>
                    </div>

                    <div class="mt-6 flex items-center justify-between">
                        {if health.connected {
                            view! {
                                <p class="text-sm text-green-700">
                                    {format!(
                                        "Device connected · last synced {}",
                                        health.snapshot.last_synced_at.format("%H:%M:%S")
                                    )}
                                </p>
                                <div class="space-x-2">
                                    <button
                                        on:click=on_sync
                                        disabled=move || syncing.get()
                                        class="px-4 py-2 rounded-lg border border-orange-500 text-orange-600 hover:bg-orange-50 disabled:opacity-50"
                                    >
                                        {move || if syncing.get() { "Syncing..." } else { "Sync Now" }}
                                    </button>
                                    <button
                                        on:click=on_disconnect
                                        class="px-4 py-2 rounded-lg border border-gray-300 hover:bg-gray-100"
                                    >
                                        "Disconnect"
                                    </button>
                                </div>
                            }
                            .into_view()
                        } else {
                            view! {
                                <p class="text-sm text-gray-500">"No device connected"</p>
                                <button
                                    on:click=on_connect
                                    class="px-4 py-2 rounded-lg bg-orange-500 hover:bg-orange-600 text-white"
                                >
                                    "Connect Device"
                                </button>
                            }
                            .into_view()
                        }}
                    </div>
                }
                .into_view(),
            }}
        </section>
    }
}

/// `15000` → `15,000`
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
