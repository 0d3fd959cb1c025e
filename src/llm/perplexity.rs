//! Perplexity chat API client
//!
//! Plain reqwest JSON client against the chat-completions endpoint. Web search
//! is disabled: the daily intent is casual conversation, not retrieval. Each
//! failure class maps to its own `ApiError` variant so the orchestrator can
//! show one fixed diagnostic per class.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::history::{Role, Turn};
use crate::llm::ChatBackend;

const SYSTEM_PROMPT: &str =
    "You are a chill, friendly AI. Keep it short and natural. No citations.";

/// Perplexity client: credential resolved once at construction; bounded
/// request timeout; at most `history_window` recent turns sent as context.
pub struct PerplexityClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    history_window: usize,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl PerplexityClient {
    pub fn new(
        api_key: Option<String>,
        base_url: &str,
        model: &str,
        timeout_secs: u64,
        history_window: usize,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("http client build failed ({e}), falling back to default client");
                reqwest::Client::new()
            });
        Self {
            client,
            api_key,
            base_url: base_url.to_string(),
            model: model.to_string(),
            history_window,
        }
    }

    /// System prompt, recent transcript, then the current user message.
    fn build_messages(&self, message: &str, history: &[Turn]) -> Vec<serde_json::Value> {
        let mut msgs = vec![json!({"role": "system", "content": SYSTEM_PROMPT})];
        let start = history.len().saturating_sub(self.history_window);
        for turn in &history[start..] {
            if turn.message.is_empty() {
                continue;
            }
            let role = match turn.role {
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            msgs.push(json!({"role": role, "content": turn.message}));
        }
        msgs.push(json!({"role": "user", "content": message}));
        msgs
    }
}

#[async_trait]
impl ChatBackend for PerplexityClient {
    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn chat(&self, message: &str, history: &[Turn]) -> Result<String, ApiError> {
        let api_key = self.api_key.as_deref().ok_or(ApiError::MissingCredential)?;

        let payload = json!({
            "model": self.model,
            "messages": self.build_messages(message, history),
            "temperature": 0.9,
            "disable_search": true,
            "return_related_sources": false,
            "search_domain_filter": ["chat"],
        });

        let resp = self
            .client
            .post(&self.base_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout
                } else {
                    ApiError::Network(e.to_string())
                }
            })?;

        let status = resp.status();
        tracing::debug!(status = %status, "perplexity response");
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let data: ChatCompletionResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let content = data
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| ApiError::Decode("no message content in response".to_string()))?;
        Ok(content)
    }
}
