//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the single upstream chat-completion call.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::core::config::AppConfig;
use crate::errors::TutorError;

/// Cheap, fast model; good enough for 1-3 sentence tutoring turns.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

const TEMPERATURE: f64 = 0.6;

/// Chat-completion client for one tutoring turn.
pub struct TutorClient {
    api_key: String,
    model: String,
    api_base: String,
}

impl TutorClient {
    #[must_use]
    pub fn new(api_key: String, model: String, api_base: String) -> Self {
        Self {
            api_key,
            model,
            api_base,
        }
    }

    /// Builds a client from the app config and an already-sanitized key.
    #[must_use]
    pub fn from_config(config: &AppConfig, api_key: String) -> Self {
        Self::new(
            api_key,
            config
                .openai_model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            config
                .openai_api_base
                .clone()
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        )
    }

    /// Issues one chat-completion request and returns the first choice's
    /// message content, defaulting to the literal `"{}"` when absent. No
    /// retry is attempted; a non-2xx response carries the raw upstream body
    /// back to the caller.
    ///
    /// # Errors
    ///
    /// Returns `TutorError::Upstream` for a non-2xx upstream status and
    /// `TutorError::Http` when the request cannot be sent or the 2xx response
    /// body is not JSON.
    pub async fn chat_completion(
        &self,
        messages: Vec<ChatCompletionMessage>,
    ) -> Result<String, TutorError> {
        #[cfg(feature = "debug-logs")]
        info!("Using chat-completion prompt:\n{:?}", messages);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Requesting chat completion with {} messages in prompt",
            messages.len()
        );

        let request_body = json!({
            "model": self.model,
            "temperature": TEMPERATURE,
            "messages": build_chat_messages(&messages),
            "response_format": { "type": "json_object" },
        });

        let client = Client::new();

        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| TutorError::Http(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| TutorError::Http(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        let response = client
            .post(format!("{}/chat/completions", self.api_base))
            .headers(headers)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| TutorError::Http(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(TutorError::Upstream(error_text));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| TutorError::Http(format!("Failed to parse OpenAI response: {e}")))?;

        let content = response_json
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|v| v.as_str())
            .unwrap_or("{}")
            .to_string();

        Ok(content)
    }
}

/// Maps the typed prompt into the plain JSON the chat-completions endpoint
/// expects. Only text content exists in this system.
pub(crate) fn build_chat_messages(messages: &[ChatCompletionMessage]) -> Vec<Value> {
    messages
        .iter()
        .map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::assistant => "assistant",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
            };

            let text = match &m.content {
                Content::Text(t) => t.as_str(),
                Content::ImageUrl(_) => "",
            };

            json!({ "role": role_str, "content": text })
        })
        .collect()
}
