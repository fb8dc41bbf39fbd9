//! AI Chat Component
//!
//! Transcript, typing indicator and message form for the mock assistant
//! (`/api/v1/assistant/messages`). The symptom checker opens inside the
//! chat panel.

use leptos::*;

use super::symptom_checker::SymptomChecker;
use crate::api;
use crate::state::global::GlobalState;
use crate::state::types::{ChatMessage, Sender};

#[component]
pub fn AiChat() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (draft, set_draft) = create_signal(String::new());
    let (sending, set_sending) = create_signal(false);
    let (show_checker, set_show_checker) = create_signal(false);

    let typing = move || state.is_typing.get() || sending.get();
    let can_send = move || !typing() && !draft.get().trim().is_empty();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !can_send() {
            return;
        }

        let text = draft.get();
        set_draft.set(String::new());
        set_sending.set(true);

        spawn_local(async move {
            match api::send_message(&text).await {
                Ok(response) => {
                    state.push_message(response.user);
                    if let Some(reply) = response.reply {
                        state.push_message(reply);
                    }
                }
                Err(e) => state.show_error(&e),
            }
            set_sending.set(false);
        });
    };

    let on_clear = move |_| {
        spawn_local(async move {
            match api::clear_conversation().await {
                Ok(conversation) => {
                    state.messages.set(conversation.messages);
                    state.is_typing.set(conversation.is_typing);
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    // Opening or closing the checker starts it over
    let on_toggle_checker = move |_| {
        set_show_checker.update(|open| *open = !*open);
        spawn_local(async move {
            match api::reset_symptoms().await {
                Ok(response) => {
                    state.symptoms.set(response.symptoms);
                    state.conditions.set(response.conditions);
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <section class="flex flex-col h-[600px] rounded-xl bg-white shadow overflow-hidden">
            <div class="bg-gradient-to-r from-orange-500 to-yellow-500 p-4 text-white flex items-center justify-between">
                <div>
                    <h2 class="font-bold">"AI Health Assistant"</h2>
                    <p class="text-xs opacity-90">"Ask about your health data"</p>
                </div>
                <div class="space-x-2">
                    <button on:click=on_toggle_checker class="px-3 py-1 text-sm rounded bg-white/20 hover:bg-white/30">
                        {move || if show_checker.get() { "Back to Chat" } else { "Symptom Checker" }}
                    </button>
                    <button on:click=on_clear class="px-3 py-1 text-sm rounded bg-white/20 hover:bg-white/30">
                        "Clear"
                    </button>
                </div>
            </div>

            {move || {
                if show_checker.get() {
                    view! { <SymptomChecker /> }.into_view()
                } else {
                    view! {
                        <ol class="flex-1 overflow-y-auto p-4 space-y-3">
                            <For
                                each=move || state.messages.get()
                                key=|message| message.id.clone()
                                children=move |message| view! { <Bubble message=message /> }
                            />
                            {move || typing().then(|| view! {
                                <li class="text-sm text-gray-500 italic">"Assistant is typing…"</li>
                            })}
                        </ol>

                        <form on:submit=on_submit class="border-t border-gray-200 p-3 flex space-x-2">
                            <input
                                type="text"
                                placeholder="Ask about your health data"
                                prop:value=move || draft.get()
                                on:input=move |ev| set_draft.set(event_target_value(&ev))
                                disabled=typing
                                class="flex-1 rounded-lg border border-gray-300 px-3 py-2 disabled:bg-gray-100"
                            />
                            <button
                                type="submit"
                                disabled=move || !can_send()
                                class="px-4 py-2 rounded-lg bg-orange-500 hover:bg-orange-600 disabled:bg-gray-400 text-white"
                            >
                                "Send"
                            </button>
                        </form>
                    }
                    .into_view()
                }
            }}
        </section>
    }
}

#[component]
fn Bubble(message: ChatMessage) -> impl IntoView {
    let (align, colors) = bubble_style(message.sender);

    view! {
        <li class=format!("flex {}", align)>
            <div class=format!("max-w-[75%] rounded-lg px-3 py-2 {}", colors)>
                <p class="whitespace-pre-wrap">{message.text}</p>
                <time class="block mt-1 text-[10px] opacity-70">
                    {message.timestamp.format("%H:%M").to_string()}
                </time>
            </div>
        </li>
    }
}

fn bubble_style(sender: Sender) -> (&'static str, &'static str) {
    match sender {
        Sender::User => ("justify-end", "bg-orange-500 text-white"),
        Sender::Assistant => ("justify-start", "bg-gray-100 text-gray-900"),
    }
}
