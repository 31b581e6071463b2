use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Reports the configured upstream endpoint and never
/// performs a remote call.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "chat-service",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoint": state.config.azure.endpoint,
    }))
}
