//! Error types for LLM-backed question answering.

use docchat_core::error::DocChatError;
use docchat_session::SessionError;

/// Errors from prompting and calling the LLM.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("question cannot be empty")]
    EmptyQuestion,
    #[error("No documents have been uploaded yet. Please upload files first.")]
    NoDocuments,
    #[error("prompt error: missing value for placeholder '{0}'")]
    MissingPlaceholder(String),
    #[error("{provider} API key not set. Set the {env_var} environment variable.")]
    MissingApiKey { provider: String, env_var: String },
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("LLM error: {0}")]
    Llm(String),
}

impl From<SessionError> for ChatError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::EmptySession => ChatError::NoDocuments,
            other => ChatError::Llm(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::Llm(format!("request failed: {}", err))
    }
}

impl From<ChatError> for DocChatError {
    fn from(err: ChatError) -> Self {
        DocChatError::Llm(err.to_string())
    }
}
