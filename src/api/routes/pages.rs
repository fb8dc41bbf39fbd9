//! Page Routes
//!
//! The landing page and demo shell are a client-side app built into
//! `server.ui_dir`. Known asset paths are served as files; every other
//! path outside `/api` gets `index.html` so the client router can take
//! over (`/`, `/demo`).

use axum::http::Uri;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::api::error::ApiError;

/// Static service for the built client
pub fn ui_service(ui_dir: &Path) -> ServeDir<ServeFile> {
    let index = ui_dir.join("index.html");
    if !index.exists() {
        tracing::warn!(
            ui_dir = %ui_dir.display(),
            "index.html not found; build inflamm-ui before serving pages"
        );
    }
    ServeDir::new(ui_dir).fallback(ServeFile::new(index))
}

/// Unknown `/api/v1` paths answer with a JSON 404 rather than the client app
pub async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
