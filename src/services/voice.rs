// Speech-intent router backed by the Phi-4 models endpoint. The model is
// asked for a constrained JSON object; the normalizer tolerates the markdown
// fences models like to wrap it in.
use thiserror::Error;

use crate::message::VoiceReply;
use crate::services::llm::{ChatMessage, CompletionClient, LlmError, ModelParams};
use crate::state::AppState;

/// The literal "null" marker the frontend expects when no page should open.
pub const NAV_NONE: &str = "null";

pub const NAV_TARGETS: [&str; 4] = [
    "module1.html",
    "module_02_marketplace.html",
    "module3.html",
    "module4.html",
];

const TEMPERATURE: f32 = 0.6;
const MAX_TOKENS: u32 = 160;

const ROUTING_PROMPT: &str = "You are the voice assistant for the Ecopay carbon \
dashboard. Answer with a single JSON object and nothing else, shaped exactly as \
{\"reply\": \"...\", \"navigate\": \"...\"}. \"reply\" is one short spoken-style \
sentence responding to the user. \"navigate\" names the dashboard page to open: \
\"module1.html\" for the carbon attribution engine (footprint, emissions, \
transaction analysis), \"module_02_marketplace.html\" for the carbon offset \
marketplace (offsets, projects, buying credits), \"module3.html\" for policy and \
macro alignment (regulations, compliance, climate targets), \"module4.html\" for \
the merchant sustainability index (brands, merchant scores). If the user is not \
asking to open a page, set \"navigate\" to the string \"null\".";

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("model reply was not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unrecognized navigation target `{0}`")]
    UnknownTarget(String),
}

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Strip code-fence markers wherever they occur, then parse the rest strictly
/// as a reply object. Unknown navigation targets are rejected rather than
/// passed through to the frontend.
pub fn normalize_reply(raw: &str) -> Result<VoiceReply, NormalizeError> {
    let stripped = raw.replace("```json", "").replace("```", "");
    let reply: VoiceReply = serde_json::from_str(stripped.trim())?;
    if reply.navigate != NAV_NONE && !NAV_TARGETS.contains(&reply.navigate.as_str()) {
        return Err(NormalizeError::UnknownTarget(reply.navigate));
    }
    Ok(reply)
}

/// The payload sent whenever anything between the upstream call and the parse
/// goes wrong. The frontend speaks it and stays on the current page.
pub fn fallback_reply() -> VoiceReply {
    VoiceReply {
        reply: "Sorry, I couldn't process that. Please try again.".to_string(),
        navigate: NAV_NONE.to_string(),
    }
}

pub async fn route_utterance(
    state: &AppState,
    token: &str,
    text: &str,
) -> Result<VoiceReply, VoiceError> {
    let messages = [ChatMessage::system(ROUTING_PROMPT), ChatMessage::user(text)];
    let params = ModelParams {
        model: &state.config.voice_model,
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    };

    let raw = CompletionClient::new(&state.http, &state.config.models_url, token)
        .complete(params, &messages)
        .await?;
    Ok(normalize_reply(&raw)?)
}
