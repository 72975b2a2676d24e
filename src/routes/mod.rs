// src/routes/mod.rs
pub mod calculate;
pub mod chat;
pub mod voice;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::SharedState;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/api/chat", post(chat::chat_handler))
        .route("/api/voice", post(voice::voice_handler))
        .route("/api/calculate", post(calculate::calculate_handler))
        .route("/", get(|| async { "Ecopay engine is online." }))
        .route("/health", get(|| async { "OK" }))
        // Wrong verbs answer 405 with a JSON body instead of axum's empty default.
        .method_not_allowed_fallback(|| async { AppError::MethodNotAllowed })
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}
