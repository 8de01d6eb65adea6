//! LLM access and document question answering.

pub mod compatible;
pub mod error;
pub mod file_chat;
pub mod llm;
pub mod prompt;

pub use compatible::CompatibleClient;
pub use error::ChatError;
pub use file_chat::FileChat;
pub use llm::{LlmClient, MockLlm};
pub use prompt::PromptTemplate;
