// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub dataset: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Deserialize)]
pub struct VoiceRequest {
    pub text: String,
}

/// The voice assistant's answer: a short spoken-style sentence plus the
/// dashboard page to open, or the string "null" when no navigation is wanted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceReply {
    pub reply: String,
    pub navigate: String,
}

#[derive(Deserialize)]
pub struct CalculateRequest {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default = "default_merchant")]
    pub merchant: String,
}

#[derive(Serialize, Deserialize)]
pub struct CalculateResponse {
    pub status: String,
    pub co2: f64,
    pub insight: String,
    pub factor_used: f64,
}

fn default_category() -> String {
    "retail".to_string()
}

fn default_merchant() -> String {
    "Unknown".to_string()
}
