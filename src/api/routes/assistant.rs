//! Assistant Routes
//!
//! - GET /api/v1/assistant/messages - Transcript and typing flag
//! - POST /api/v1/assistant/messages - Send a message, wait for the reply
//! - DELETE /api/v1/assistant/messages - Clear the conversation
//! - GET /api/v1/assistant/symptoms - Symptoms and possible conditions
//! - POST /api/v1/assistant/symptoms - Add a symptom
//! - DELETE /api/v1/assistant/symptoms - Reset the symptom checker
//! - DELETE /api/v1/assistant/symptoms/:id - Remove a symptom

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    AddSymptomRequest, ConversationResponse, SendMessageRequest, SendMessageResponse,
    SymptomsResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/assistant/messages
pub async fn get_messages(State(state): State<Arc<AppState>>) -> Json<ConversationResponse> {
    Json(ConversationResponse {
        messages: state.conversation.messages().await,
        is_typing: state.conversation.is_typing().await,
    })
}

/// POST /api/v1/assistant/messages
///
/// Responds once the simulated reply has landed. Returns 409 while a
/// previous message is still awaiting its reply.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SendMessageResponse>)> {
    let Json(request) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let outcome = state.conversation.send_message(&request.text).await?;

    Ok((
        StatusCode::CREATED,
        Json(SendMessageResponse {
            user: outcome.user,
            reply: outcome.reply,
        }),
    ))
}

/// DELETE /api/v1/assistant/messages
pub async fn clear_conversation(
    State(state): State<Arc<AppState>>,
) -> Json<ConversationResponse> {
    let messages = state.conversation.clear_conversation().await;
    Json(ConversationResponse {
        messages,
        is_typing: false,
    })
}

/// GET /api/v1/assistant/symptoms
pub async fn get_symptoms(State(state): State<Arc<AppState>>) -> Json<SymptomsResponse> {
    Json(SymptomsResponse {
        symptoms: state.symptoms.symptoms().await,
        conditions: state.symptoms.conditions().await,
    })
}

/// POST /api/v1/assistant/symptoms
pub async fn add_symptom(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddSymptomRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SymptomsResponse>)> {
    let Json(request) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let update = state.symptoms.add_symptom(&request.name).await?;
    tracing::debug!(symptom_id = %update.symptom.id, "Symptom recorded");

    Ok((
        StatusCode::CREATED,
        Json(SymptomsResponse {
            symptoms: state.symptoms.symptoms().await,
            conditions: update.conditions,
        }),
    ))
}

/// DELETE /api/v1/assistant/symptoms
pub async fn reset_symptoms(State(state): State<Arc<AppState>>) -> Json<SymptomsResponse> {
    state.symptoms.reset().await;
    Json(SymptomsResponse {
        symptoms: Vec::new(),
        conditions: Vec::new(),
    })
}

/// DELETE /api/v1/assistant/symptoms/:id
pub async fn remove_symptom(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.symptoms.remove_symptom(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
