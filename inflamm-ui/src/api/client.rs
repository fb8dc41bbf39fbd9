//! HTTP API Client
//!
//! Functions for calling the InflammAI demo API.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::state::types::{ChatMessage, Condition, HealthView, Symptom, WalletSession};

/// Default API base: the server that serves this app
pub const DEFAULT_API_BASE: &str = "/api/v1";

const API_BASE_KEY: &str = "inflamm_api_url";

/// Routes relative to the API base
pub mod endpoints {
    pub const WALLET: &str = "/wallet";
    pub const WALLET_CONNECT: &str = "/wallet/connect";
    pub const WALLET_DISCONNECT: &str = "/wallet/disconnect";
    pub const HEALTH: &str = "/health";
    pub const HEALTH_CONNECT: &str = "/health/connect";
    pub const HEALTH_DISCONNECT: &str = "/health/disconnect";
    pub const HEALTH_SYNC: &str = "/health/sync";
    pub const MESSAGES: &str = "/assistant/messages";
    pub const SYMPTOMS: &str = "/assistant/symptoms";

    pub fn symptom(id: &str) -> String {
        format!("{}/{}", SYMPTOMS, id)
    }
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Join the API base and a route
pub fn api_url(api_base: &str, path: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), path)
}

fn url(path: &str) -> String {
    api_url(&get_api_base(), path)
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct SyncResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct ConversationResponse {
    pub messages: Vec<ChatMessage>,
    pub is_typing: bool,
}

#[derive(Debug, serde::Deserialize)]
pub struct SendMessageResponse {
    pub user: ChatMessage,
    /// Absent when the conversation was cleared before the reply landed
    pub reply: Option<ChatMessage>,
}

#[derive(Debug, serde::Deserialize)]
pub struct SymptomsResponse {
    pub symptoms: Vec<Symptom>,
    pub conditions: Vec<Condition>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: ErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: String,
}

// ============ API Functions ============

async fn check(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let message = response
        .json::<ApiError>()
        .await
        .map(|e| e.error.message)
        .unwrap_or_else(|_| format!("Request failed ({})", response.status()));
    Err(message)
}

async fn read<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    check(response)
        .await?
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&url(path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    read(response).await
}

async fn post_empty(path: &str) -> Result<Response, String> {
    Request::post(&url(path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))
}

async fn delete(path: &str) -> Result<Response, String> {
    Request::delete(&url(path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))
}

/// Current wallet session
pub async fn fetch_wallet() -> Result<WalletSession, String> {
    get(endpoints::WALLET).await
}

/// Simulated connect; resolves after the server's wallet delay
pub async fn connect_wallet() -> Result<WalletSession, String> {
    read(post_empty(endpoints::WALLET_CONNECT).await?).await
}

pub async fn disconnect_wallet() -> Result<WalletSession, String> {
    read(post_empty(endpoints::WALLET_DISCONNECT).await?).await
}

/// Dashboard payload
pub async fn fetch_health() -> Result<HealthView, String> {
    get(endpoints::HEALTH).await
}

pub async fn connect_health() -> Result<(), String> {
    check(post_empty(endpoints::HEALTH_CONNECT).await?).await?;
    Ok(())
}

pub async fn disconnect_health() -> Result<(), String> {
    check(post_empty(endpoints::HEALTH_DISCONNECT).await?).await?;
    Ok(())
}

pub async fn sync_health() -> Result<SyncResponse, String> {
    read(post_empty(endpoints::HEALTH_SYNC).await?).await
}

/// Transcript and typing flag
pub async fn fetch_conversation() -> Result<ConversationResponse, String> {
    get(endpoints::MESSAGES).await
}

/// Send a message; resolves once the reply has landed
pub async fn send_message(text: &str) -> Result<SendMessageResponse, String> {
    #[derive(serde::Serialize)]
    struct SendMessageRequest<'a> {
        text: &'a str,
    }

    let response = Request::post(&url(endpoints::MESSAGES))
        .json(&SendMessageRequest { text })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    read(response).await
}

pub async fn clear_conversation() -> Result<ConversationResponse, String> {
    read(delete(endpoints::MESSAGES).await?).await
}

/// Symptoms and possible conditions
pub async fn fetch_symptoms() -> Result<SymptomsResponse, String> {
    get(endpoints::SYMPTOMS).await
}

/// Add a symptom; resolves after the conditions are redrawn
pub async fn add_symptom(name: &str) -> Result<SymptomsResponse, String> {
    #[derive(serde::Serialize)]
    struct AddSymptomRequest<'a> {
        name: &'a str,
    }

    let response = Request::post(&url(endpoints::SYMPTOMS))
        .json(&AddSymptomRequest { name })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    read(response).await
}

pub async fn remove_symptom(id: &str) -> Result<(), String> {
    check(delete(&endpoints::symptom(id)).await?).await?;
    Ok(())
}

/// Clear symptoms and conditions
pub async fn reset_symptoms() -> Result<SymptomsResponse, String> {
    read(delete(endpoints::SYMPTOMS).await?).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_target_api_v1() {
        let routes = [
            (endpoints::WALLET_CONNECT, "/api/v1/wallet/connect"),
            (endpoints::WALLET_DISCONNECT, "/api/v1/wallet/disconnect"),
            (endpoints::HEALTH, "/api/v1/health"),
            (endpoints::HEALTH_CONNECT, "/api/v1/health/connect"),
            (endpoints::HEALTH_DISCONNECT, "/api/v1/health/disconnect"),
            (endpoints::HEALTH_SYNC, "/api/v1/health/sync"),
            (endpoints::MESSAGES, "/api/v1/assistant/messages"),
            (endpoints::SYMPTOMS, "/api/v1/assistant/symptoms"),
        ];
        for (path, expected) in routes {
            assert_eq!(api_url(DEFAULT_API_BASE, path), expected);
        }
        assert_eq!(
            api_url(DEFAULT_API_BASE, &endpoints::symptom("abc")),
            "/api/v1/assistant/symptoms/abc"
        );
    }

    #[test]
    fn test_api_url_custom_base() {
        assert_eq!(
            api_url("http://localhost:8084/api/v1/", endpoints::WALLET),
            "http://localhost:8084/api/v1/wallet"
        );
    }

    #[test]
    fn test_error_body_parses() {
        let json = r#"{"error": {"code": "ASSISTANT_BUSY", "message": "Conflict: busy"}, "request_id": "r1"}"#;
        let error: ApiError = serde_json::from_str(json).unwrap();
        assert_eq!(error.error.message, "Conflict: busy");
    }
}
