use thiserror::Error;

/// Top-level error type for DocChat.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define their
/// own error types and implement `From<SubsystemError> for DocChatError` so
/// that the `?` operator works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported file type: {0}. Supported types: PDF, TXT, CSV, DOCX")]
    UnsupportedType(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for DocChatError {
    fn from(err: toml::de::Error) -> Self {
        DocChatError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for DocChatError {
    fn from(err: toml::ser::Error) -> Self {
        DocChatError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for DocChatError {
    fn from(err: serde_json::Error) -> Self {
        DocChatError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for DocChat operations.
pub type Result<T> = std::result::Result<T, DocChatError>;
