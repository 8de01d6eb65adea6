//! Error types for the text-to-SQL mode.

use docchat_chat::ChatError;
use docchat_core::error::DocChatError;

#[derive(Debug, thiserror::Error)]
pub enum SqlError {
    #[error("question cannot be empty")]
    EmptyQuestion,
    #[error("no SQL statement to execute")]
    EmptyQuery,
    #[error("Failed to open database: {0}")]
    Open(String),
    #[error("Error executing query: {0}")]
    Execution(String),
    #[error("Database lock poisoned: {0}")]
    Lock(String),
    #[error(transparent)]
    Chat(#[from] ChatError),
}

impl From<rusqlite::Error> for SqlError {
    fn from(err: rusqlite::Error) -> Self {
        SqlError::Execution(err.to_string())
    }
}

impl From<SqlError> for DocChatError {
    fn from(err: SqlError) -> Self {
        match err {
            SqlError::Chat(e) => e.into(),
            other => DocChatError::Database(other.to_string()),
        }
    }
}
