use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{CompletionProvider, ProviderError};
use crate::models::ChatMessage;

/// Ollama HTTP client for local chat completion.
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaClient {
    /// Create a new OllamaClient pointing at an Ollama instance.
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Default Ollama instance at localhost:11434.
    pub fn default_local(model: &str) -> Self {
        Self::new("http://localhost:11434", model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Request body for Ollama /api/chat
#[derive(Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

/// Response body from Ollama /api/chat
#[derive(Deserialize)]
struct OllamaChatResponse {
    message: OllamaChatMessage,
}

#[derive(Deserialize)]
struct OllamaChatMessage {
    content: String,
}

#[async_trait]
impl CompletionProvider for OllamaClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let url = format!("{}/api/chat", self.base_url);
        let body = OllamaChatRequest {
            model: &self.model,
            messages,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::Failure(format!("Cannot reach Ollama at {}", self.base_url))
                } else if e.is_timeout() {
                    ProviderError::Failure("Ollama request timed out".to_string())
                } else {
                    ProviderError::Failure(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Failure(format!(
                "Ollama returned HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        let parsed: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Failure(e.to_string()))?;

        Ok(parsed.message.content)
    }
}
