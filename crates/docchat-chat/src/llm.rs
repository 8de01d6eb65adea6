//! The LLM seam: anything that turns a prompt into a completion.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ChatError;

/// A text-completion backend.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Label used in logs.
    fn name(&self) -> &str;

    /// Send one user prompt and return the model's reply.
    async fn complete(&self, prompt: &str) -> Result<String, ChatError>;
}

/// Canned LLM for tests and offline runs. Records every prompt it receives.
#[derive(Debug)]
pub struct MockLlm {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl MockLlm {
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            reply: Ok(response.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A mock whose every call fails with `ChatError::Llm(message)`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

impl Default for MockLlm {
    fn default() -> Self {
        Self::with_response("This is a mock answer.")
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ChatError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.reply.clone().map_err(ChatError::Llm)
    }
}
