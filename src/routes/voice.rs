use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::message::VoiceRequest;
use crate::services::voice;
use crate::state::SharedState;

pub async fn voice_handler(
    State(state): State<SharedState>,
    Json(payload): Json<VoiceRequest>,
) -> Response {
    // Missing credential is a configuration error, not an upstream one: no
    // call is attempted and the client gets a distinct 500, never a 401.
    let Some(token) = state.config.models_token.as_deref() else {
        tracing::error!("voice request received but no GitHub Models token is set");
        return AppError::Config("GITHUB_TOKEN").into_response();
    };

    match voice::route_utterance(&state, token, payload.text.trim()).await {
        Ok(reply) => Json(reply).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "voice routing failed, answering with fallback");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(voice::fallback_reply()),
            )
                .into_response()
        }
    }
}
