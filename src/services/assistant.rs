// Groq-backed text assistant for the dashboard chat widget.
use crate::services::llm::{ChatMessage, CompletionClient, LlmError, ModelParams};
use crate::state::AppState;

pub const DATASET_PLACEHOLDER: &str = "No transaction data provided.";

const PERSONA: &str = "You are Ecopay's AI Assistant, an expert in personal carbon \
footprints, sustainable spending, and climate-friendly finance. Use the transaction \
data below to answer questions about the user's spending and emissions when it is \
relevant. Keep your responses polite, encouraging, concise, and helpful.";

const TEMPERATURE: f32 = 0.6;
const MAX_TOKENS: u32 = 400;

pub fn build_system_prompt(dataset: Option<&str>) -> String {
    let dataset = match dataset {
        Some(d) if !d.trim().is_empty() => d,
        _ => DATASET_PLACEHOLDER,
    };
    format!("{PERSONA}\n\nTransaction data:\n{dataset}")
}

/// One completion round-trip: persona + dataset as the system message, the
/// user's text as the only other message.
pub async fn answer(
    state: &AppState,
    api_key: &str,
    message: &str,
    dataset: Option<&str>,
) -> Result<String, LlmError> {
    let messages = [
        ChatMessage::system(build_system_prompt(dataset)),
        ChatMessage::user(message),
    ];
    let params = ModelParams {
        model: &state.config.groq_model,
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    };

    CompletionClient::new(&state.http, &state.config.groq_url, api_key)
        .complete(params, &messages)
        .await
}
