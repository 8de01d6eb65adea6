//! Client for OpenAI-compatible `/v1/chat/completions` endpoints (Groq by default).

use std::time::Duration;

use async_trait::async_trait;
use docchat_core::config::LlmConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ChatError;
use crate::llm::LlmClient;

/// A chat-completions client. The API key is looked up once at construction
/// and a missing key is only reported when a request is attempted.
#[derive(Debug, Clone)]
pub struct CompatibleClient {
    provider: String,
    base_url: String,
    model: String,
    api_key: Option<String>,
    api_key_env: String,
    temperature: f64,
    max_tokens: Option<u32>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage<'a>>,
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompatibleClient {
    /// Build a client from config, reading the key from `config.api_key_env`.
    pub fn from_config(config: &LlmConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            warn!(
                env_var = %config.api_key_env,
                "API key not set; LLM requests will fail until it is"
            );
        }
        Self::new(config, api_key)
    }

    /// Build a client with an explicit key.
    pub fn new(config: &LlmConfig, api_key: Option<String>) -> Self {
        Self {
            provider: config.provider.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            api_key_env: config.api_key_env.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .connect_timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmClient for CompatibleClient {
    fn name(&self) -> &str {
        &self.provider
    }

    async fn complete(&self, prompt: &str) -> Result<String, ChatError> {
        let api_key = self.api_key.as_ref().ok_or_else(|| ChatError::MissingApiKey {
            provider: self.provider.clone(),
            env_var: self.api_key_env.clone(),
        })?;

        let body = CompletionRequest {
            model: &self.model,
            messages: vec![CompletionMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!(
            provider = %self.provider,
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "Sending completion request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(provider = %self.provider, status = status.as_u16(), "LLM request rejected");
            return Err(ChatError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Llm(format!("invalid response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| ChatError::Llm("response contained no choices".to_string()))
    }
}
