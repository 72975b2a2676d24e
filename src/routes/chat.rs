use axum::{Json, extract::State};

use crate::error::AppError;
use crate::message::{ChatRequest, ChatResponse};
use crate::services::assistant;
use crate::state::SharedState;

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = payload.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    let Some(api_key) = state.config.groq_api_key.as_deref() else {
        tracing::error!("chat request received but GROQ_API_KEY is not set");
        return Err(AppError::Config("GROQ_API_KEY"));
    };

    let reply = assistant::answer(&state, api_key, message, payload.dataset.as_deref())
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "chat completion failed");
            AppError::Upstream
        })?;

    Ok(Json(ChatResponse { reply }))
}
