/// Completion Client — the single point of entry for all OpenAI API
/// calls in Nova.
///
/// ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
/// All completion requests MUST go through this module.
///
/// Model: gpt-4 (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all completion calls in Nova.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4";
/// Output budget: roughly a 300–400 word feedback response.
const MAX_TOKENS: u32 = 500;
/// Moderate sampling — varied phrasing without losing coherence.
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Completion returned empty content")]
    EmptyContent,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Message author role on the chat completions wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A single role-tagged message in a completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A fully-formed completion request, validated at construction.
///
/// Model, temperature, and output budget are fixed crate-wide; callers only
/// supply the ordered message list.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    model: &'static str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Result<Self, CompletionError> {
        if messages.is_empty() {
            return Err(CompletionError::InvalidRequest(
                "at least one message is required".to_string(),
            ));
        }
        if messages.iter().any(|m| m.content.trim().is_empty()) {
            return Err(CompletionError::InvalidRequest(
                "message content cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            model: MODEL,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        })
    }
}

/// The completion backend seam. Implement this to swap backends without
/// touching the dispatcher, handlers, or caller code.
///
/// Carried in `AppState` as `Arc<dyn CompletionService>`.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Submits one request and returns the generated text.
    /// Single attempt — callers own any fallback behavior.
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// Production completion client speaking the OpenAI chat API.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    /// Makes one call to the chat completions endpoint. No retry: each
    /// submission is independent, and the caller degrades gracefully on
    /// failure rather than waiting out a backoff loop.
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the structured error message
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Completion call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        completion
            .choices
            .into_iter()
            .find_map(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(CompletionError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_empty_message_list() {
        let result = CompletionRequest::new(vec![]);
        assert!(matches!(result, Err(CompletionError::InvalidRequest(_))));
    }

    #[test]
    fn test_request_rejects_blank_message_content() {
        let result = CompletionRequest::new(vec![
            ChatMessage::system("You are a tutor."),
            ChatMessage::user("   "),
        ]);
        assert!(matches!(result, Err(CompletionError::InvalidRequest(_))));
    }

    #[test]
    fn test_request_carries_fixed_model_and_sampling() {
        let request = CompletionRequest::new(vec![ChatMessage::user("Review my draft.")]).unwrap();
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["model"], MODEL);
        assert_eq!(wire["max_tokens"], 500);
        assert!((wire["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_roles_serialize_lowercase() {
        let request = CompletionRequest::new(vec![
            ChatMessage::system("persona"),
            ChatMessage::user("draft"),
        ])
        .unwrap();
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["messages"][0]["role"], "system");
        assert_eq!(wire["messages"][1]["role"], "user");
    }

    #[test]
    fn test_message_order_is_preserved() {
        let request = CompletionRequest::new(vec![
            ChatMessage::system("first"),
            ChatMessage::user("second"),
        ])
        .unwrap();
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["messages"][0]["content"], "first");
        assert_eq!(wire["messages"][1]["content"], "second");
    }

    #[test]
    fn test_completion_response_extracts_first_content() {
        let json = r#"{
            "choices": [
                {"message": {"content": "Your thesis is clear but broad."}}
            ],
            "usage": {"prompt_tokens": 120, "completion_tokens": 84}
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        let text = response
            .choices
            .into_iter()
            .find_map(|c| c.message.content)
            .unwrap();
        assert_eq!(text, "Your thesis is clear but broad.");
    }
}
