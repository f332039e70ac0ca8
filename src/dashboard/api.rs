use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use super::store::{DataStore, validate};

// ── Shared application state ──────────────────────────────────────────

pub struct AppState {
    pub store: DataStore,
}

pub type SharedState = Arc<AppState>;

// ── Error handling ────────────────────────────────────────────────────

pub enum ApiError {
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(serde_json::json!({"error": message}))).into_response()
    }
}

// ── Router ────────────────────────────────────────────────────────────

pub fn api_router() -> Router<SharedState> {
    Router::new()
        .route("/api/data", get(get_data))
        .route("/health", get(health_check))
}

// ── Handlers ──────────────────────────────────────────────────────────

async fn health_check() -> &'static str {
    "ok"
}

/// The single retrieval operation: reread both workspace files and return
/// their union. The caller only ever sees a generic failure message; the
/// underlying cause goes to the log.
async fn get_data(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.clone();
    let payload = tokio::task::spawn_blocking(move || store.load())
        .await
        .map_err(|e| {
            tracing::error!("Data load task failed: {}", e);
            ApiError::Internal("Failed to load data".to_string())
        })?
        .map_err(|e| {
            tracing::error!("Error loading data: {}", e);
            ApiError::Internal("Failed to load data".to_string())
        })?;

    for warning in validate(&payload) {
        tracing::warn!("{}", warning);
    }

    Ok(Json(payload))
}

// ── Tests ─────────────────────────────────────────────────────────────
