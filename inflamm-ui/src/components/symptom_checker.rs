//! Symptom Checker Component
//!
//! Add and remove symptoms through `/api/v1/assistant/symptoms` and show
//! the conditions the server draws.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;
use crate::state::sync;
use crate::state::types::{Condition, Likelihood};
use crate::state::Refresh;

#[component]
pub fn SymptomChecker() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (draft, set_draft) = create_signal(String::new());
    let (analyzing, set_analyzing) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let name = draft.get();
        if name.trim().is_empty() || analyzing.get() {
            return;
        }
        set_draft.set(String::new());
        set_analyzing.set(true);

        spawn_local(async move {
            match api::add_symptom(&name).await {
                Ok(response) => {
                    state.symptoms.set(response.symptoms);
                    state.conditions.set(response.conditions);
                }
                Err(e) => state.show_error(&e),
            }
            set_analyzing.set(false);
        });
    };

    let remove = move |id: String| {
        spawn_local(async move {
            if let Err(e) = api::remove_symptom(&id).await {
                state.show_error(&e);
            }
            sync::refresh(state, Refresh::Symptoms).await;
        });
    };

    view! {
        <div class="flex-1 overflow-y-auto p-4 space-y-4">
            <form on:submit=on_submit class="flex space-x-2">
                <input
                    type="text"
                    placeholder="Describe a symptom, e.g. headache"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    class="flex-1 rounded-lg border border-gray-300 px-3 py-2"
                />
                <button
                    type="submit"
                    disabled=move || analyzing.get()
                    class="px-4 py-2 rounded-lg bg-orange-500 hover:bg-orange-600 disabled:bg-gray-400 text-white"
                >
                    "Add"
                </button>
            </form>

            <ul class="flex flex-wrap gap-2">
                <For
                    each=move || state.symptoms.get()
                    key=|symptom| symptom.id.clone()
                    children=move |symptom| {
                        let id = symptom.id.clone();
                        view! {
                            <li class="flex items-center space-x-1 rounded-full bg-orange-100 px-3 py-1 text-sm">
                                <span>{symptom.name}</span>
                                <button
                                    on:click=move |_| remove(id.clone())
                                    aria-label="Remove symptom"
                                    class="text-orange-700 hover:text-orange-900"
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            {move || analyzing.get().then(|| view! {
                <p class="text-sm text-gray-500 italic">"Analyzing symptoms…"</p>
            })}

            {move || {
                let conditions = state.conditions.get();
                (!conditions.is_empty()).then(|| view! {
                    <div>
                        <h3 class="font-semibold">"Possible Conditions"</h3>
                        <ul class="mt-2 space-y-3">
                            {conditions
                                .into_iter()
                                .map(|condition| view! { <ConditionCard condition=condition /> })
                                .collect_view()}
                        </ul>
                        <p class="mt-3 text-xs text-gray-500">
                            "This is not medical advice. Consult a healthcare professional."
                        </p>
                    </div>
                })
            }}
        </div>
    }
}

#[component]
fn ConditionCard(condition: Condition) -> impl IntoView {
    view! {
        <li class="rounded-lg border border-gray-200 p-3">
            <div class="flex items-center justify-between">
                <h4 class="font-medium">{condition.name}</h4>
                <span class=format!("text-xs px-2 py-0.5 rounded-full {}", likelihood_badge(condition.likelihood))>
                    {condition.likelihood.label()}
                </span>
            </div>
            <p class="mt-1 text-sm text-gray-600">{condition.description}</p>
            <ul class="mt-2 list-disc list-inside text-sm">
                {condition
                    .recommendations
                    .into_iter()
                    .map(|rec| view! { <li>{rec}</li> })
                    .collect_view()}
            </ul>
        </li>
    }
}

fn likelihood_badge(likelihood: Likelihood) -> &'static str {
    match likelihood {
        Likelihood::High => "bg-red-100 text-red-700",
        Likelihood::Medium => "bg-yellow-100 text-yellow-700",
        Likelihood::Low => "bg-green-100 text-green-700",
    }
}
