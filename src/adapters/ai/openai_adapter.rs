//! OpenAI-compatible chat completion adapter.
//!
//! Defaults to Groq's endpoint; works with OpenAI, Ollama or any compatible API.
//! Implements `CompletionPort`.

use crate::domain::{ChatMessage, CompletionParams, DomainError};
use crate::ports::CompletionPort;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// OpenAI-compatible completion adapter. Holds the API key server-side.
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    params: CompletionParams,
}

impl OpenAiAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `api_url` - Endpoint (e.g., "https://api.groq.com/openai/v1/chat/completions")
    /// * `api_key` - Bearer token for the endpoint
    /// * `params` - Model identifier, temperature and output cap sent with every request
    pub fn new(api_url: String, api_key: String, params: CompletionParams) -> Self {
        Self::with_timeout(api_url, api_key, params, Duration::from_secs(30))
    }

    pub fn with_timeout(
        api_url: String,
        api_key: String,
        params: CompletionParams,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            api_url,
            api_key,
            params,
        }
    }

    fn build_request<'a>(&'a self, messages: &'a [ChatMessage]) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.params.model,
            messages,
            temperature: self.params.temperature,
            max_tokens: self.params.max_tokens,
        }
    }
}

/// Chat completion request body.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

/// Chat completion response body. Only the fields we read.
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<MessageContent>,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

#[async_trait::async_trait]
impl CompletionPort for OpenAiAdapter {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Option<String>, DomainError> {
        info!(
            model = %self.params.model,
            turns = messages.len(),
            "sending transcript for completion"
        );

        let request = self.build_request(messages);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Completion(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "completion API returned error");
            return Err(DomainError::Completion(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            DomainError::Completion(format!("Failed to parse API response: {}", e))
        })?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|text| !text.is_empty());

        debug!(
            reply_len = content.as_ref().map(String::len).unwrap_or(0),
            "received completion"
        );

        Ok(content)
    }
}
