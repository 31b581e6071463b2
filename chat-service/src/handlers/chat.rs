use axum::{extract::State, Json};
use validator::Validate;

use crate::models::{ChatBothRequest, ChatBothResponse, ChatRequest, ModelAnswer};
use crate::services::providers::{ChatMessage, ProviderError};
use crate::startup::AppState;
use service_core::error::AppError;

/// Placeholder rendered into a result slot whose deployment call failed.
const ERROR_PLACEHOLDER: &str = "Error fetching response";

#[tracing::instrument(skip(state, request))]
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ModelAnswer>, AppError> {
    request.validate()?;

    let message = request.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!("Message is required")));
    }

    let deployment = state
        .config
        .deployments
        .for_target(request.model)
        .to_string();
    let messages = vec![ChatMessage::user(message)];

    let response = state
        .provider
        .complete(&deployment, &messages)
        .await
        .map_err(|e| {
            tracing::error!(
                deployment = %deployment,
                error = %e,
                "Chat completion failed"
            );
            AppError::BadGateway("Failed to get response from model".to_string())
        })?;

    Ok(Json(ModelAnswer {
        model: deployment,
        response,
    }))
}

#[tracing::instrument(skip(state, request))]
pub async fn chat_both(
    State(state): State<AppState>,
    Json(request): Json<ChatBothRequest>,
) -> Result<Json<ChatBothResponse>, AppError> {
    request.validate()?;

    let message = request.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!("Message is required")));
    }

    // Both targets receive an identical prompt.
    let messages = vec![ChatMessage::user(message)];
    let primary = state.config.deployments.primary.clone();
    let secondary = state.config.deployments.secondary.clone();

    // The two calls run concurrently; the join waits for the slower one,
    // so the wall-clock cost is the max of the two, never the sum.
    let (primary_result, secondary_result) = tokio::join!(
        state.provider.complete(&primary, &messages),
        state.provider.complete(&secondary, &messages),
    );

    Ok(Json(ChatBothResponse {
        primary: into_answer(primary, primary_result),
        secondary: into_answer(secondary, secondary_result),
    }))
}

/// Graceful degradation: one deployment's outage must not drop the other
/// side's answer, so a failed call becomes a placeholder slot instead of
/// aborting the request.
fn into_answer(deployment: String, result: Result<String, ProviderError>) -> ModelAnswer {
    match result {
        Ok(response) => ModelAnswer {
            model: deployment,
            response,
        },
        Err(e) => {
            tracing::error!(
                deployment = %deployment,
                error = %e,
                "Chat completion failed"
            );
            ModelAnswer {
                model: deployment,
                response: ERROR_PLACEHOLDER.to_string(),
            }
        }
    }
}
