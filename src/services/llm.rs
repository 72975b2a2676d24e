// Thin client for OpenAI-compatible chat-completions endpoints. Both the Groq
// and the GitHub Models providers speak this shape.
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ModelParams<'a> {
    pub model: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Serialize)]
struct CompletionPayload<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionReply {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("upstream reply contained no choices")]
    EmptyReply,
}

pub struct CompletionClient<'a> {
    http: &'a reqwest::Client,
    endpoint: &'a str,
    api_key: &'a str,
}

impl<'a> CompletionClient<'a> {
    pub fn new(http: &'a reqwest::Client, endpoint: &'a str, api_key: &'a str) -> Self {
        Self {
            http,
            endpoint,
            api_key,
        }
    }

    /// Issue one completion request and return the first choice's text.
    pub async fn complete(
        &self,
        params: ModelParams<'_>,
        messages: &[ChatMessage],
    ) -> Result<String, LlmError> {
        let payload = CompletionPayload {
            model: params.model,
            messages,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        let response = self
            .http
            .post(self.endpoint)
            .bearer_auth(self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The body stays in the logs; callers only see the status.
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "completion endpoint returned an error");
            return Err(LlmError::Status(status));
        }

        let reply: CompletionReply = response.json().await?;
        reply
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(LlmError::EmptyReply)
    }
}
