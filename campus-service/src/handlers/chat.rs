use crate::models::chat::{ChatRequest, ChatResult};
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use service_core::error::AppError;

const MESSAGE_REQUIRED: &str = "Message is required";

/// `POST /api/chat`.
///
/// Provider trouble is reported inside `reply`; the envelope still says
/// `success: true` because the pipeline itself completed.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResult>, AppError> {
    tracing::info!("Chat request received");

    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "Unreadable chat body");
        AppError::bad_request(MESSAGE_REQUIRED)
    })?;

    let message = request
        .trimmed_message()
        .ok_or_else(|| AppError::bad_request(MESSAGE_REQUIRED))?;

    let reply = state.assistant.generate(message).await;

    tracing::info!(reply_len = reply.len(), "Chat reply generated");

    Ok(Json(ChatResult::ai(reply)))
}
