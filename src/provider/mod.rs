//! Completion provider abstraction.
//!
//! The chat pipeline talks to a text-completion backend through the
//! `CompletionProvider` trait: hand it the ordered message list, get
//! the assistant's reply back. `OllamaClient` implements it against a
//! local Ollama instance; `MockProvider` backs tests and offline runs.

pub mod ollama;

pub use ollama::OllamaClient;

use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::ChatMessage;

/// Provider failures collapse into a single variant carrying the
/// underlying message. Cause classification (rate limit, network,
/// auth) is deliberately not preserved.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("AI service error: {0}")]
    Failure(String),
}

/// A text-completion backend. `messages` is ordered oldest-first with
/// the system prompt at the front and the new user prompt at the end.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError>;
}

/// Mock provider for testing — returns a configured reply or failure
/// and records every message list it was called with.
pub struct MockProvider {
    outcome: Result<String, String>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockProvider {
    pub fn replying(response: &str) -> Self {
        Self {
            outcome: Ok(response.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Message lists seen so far, oldest call first.
    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(messages.to_vec());

        match &self.outcome {
            Ok(response) => Ok(response.clone()),
            Err(message) => Err(ProviderError::Failure(message.clone())),
        }
    }
}
