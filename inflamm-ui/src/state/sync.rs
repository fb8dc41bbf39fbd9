//! Fetches that fill the global signals from the API

use leptos::*;

use super::global::{GlobalState, Refresh};
use crate::api;

/// Load every demo holder's state. Run when the demo page mounts and after
/// each (re)connect of the stream, since events may have been missed.
pub fn load_all(state: GlobalState) {
    spawn_local(async move {
        match api::fetch_wallet().await {
            Ok(session) => state.wallet.set(session),
            Err(e) => state.show_error(&e),
        }
        match api::fetch_conversation().await {
            Ok(conversation) => {
                state.messages.set(conversation.messages);
                state.is_typing.set(conversation.is_typing);
            }
            Err(e) => state.show_error(&e),
        }
        refresh(state, Refresh::Health).await;
        refresh(state, Refresh::Symptoms).await;
    });
}

/// Fetch the part of the state an event left stale
pub async fn refresh(state: GlobalState, what: Refresh) {
    match what {
        Refresh::Health => match api::fetch_health().await {
            Ok(view) => state.health.set(Some(view)),
            Err(e) => state.show_error(&e),
        },
        Refresh::Symptoms => match api::fetch_symptoms().await {
            Ok(response) => {
                state.symptoms.set(response.symptoms);
                state.conditions.set(response.conditions);
            }
            Err(e) => state.show_error(&e),
        },
    }
}
