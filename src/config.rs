// src/config.rs
use std::env;

const DEFAULT_GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODELS_URL: &str = "https://models.github.ai/inference/chat/completions";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub groq_api_key: Option<String>,
    pub groq_url: String,
    pub groq_model: String,
    pub models_token: Option<String>,
    pub models_url: String,
    pub voice_model: String,
}

impl AppConfig {
    /// Read configuration from the process environment. A missing credential
    /// does not prevent startup; the affected handler reports it per request.
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            groq_api_key: non_empty(env::var("GROQ_API_KEY").ok()),
            groq_url: env::var("GROQ_URL").unwrap_or_else(|_| DEFAULT_GROQ_URL.to_string()),
            groq_model: env::var("GROQ_MODEL").unwrap_or_else(|_| "llama3-70b-8192".to_string()),
            // GITHUB_MODELS_TOKEN is accepted as a fallback name for deployments
            // where GITHUB_TOKEN is reserved by the platform.
            models_token: non_empty(env::var("GITHUB_TOKEN").ok())
                .or_else(|| non_empty(env::var("GITHUB_MODELS_TOKEN").ok())),
            models_url: env::var("MODELS_URL").unwrap_or_else(|_| DEFAULT_MODELS_URL.to_string()),
            voice_model: env::var("VOICE_MODEL").unwrap_or_else(|_| "microsoft/Phi-4".to_string()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_filters_blank_values() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("".to_string())), None);
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(non_empty(Some("key".to_string())), Some("key".to_string()));
    }
}
