//! Question answering over the documents in a session.

use std::sync::Arc;

use docchat_session::DocumentSession;
use tracing::{info, warn};

use crate::error::ChatError;
use crate::llm::LlmClient;
use crate::prompt::PromptTemplate;

/// Answers questions using only the text of uploaded documents.
pub struct FileChat {
    client: Arc<dyn LlmClient>,
    template: PromptTemplate,
}

impl FileChat {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client,
            template: PromptTemplate::document_qa(),
        }
    }

    /// Replace the prompt. It must use `{context}` and `{question}`.
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        let placeholders = template.placeholders();
        for required in ["context", "question"] {
            if !placeholders.contains(&required) {
                warn!(placeholder = required, "Chat template does not use placeholder");
            }
        }
        self.template = template;
        self
    }

    /// Render the prompt for `question` against the session's documents.
    pub fn build_prompt(
        &self,
        session: &DocumentSession,
        question: &str,
    ) -> Result<String, ChatError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ChatError::EmptyQuestion);
        }
        let context = session.assemble_context()?;
        self.template
            .render(&[("context", context.as_str()), ("question", question)])
    }

    /// Ask the LLM about the session's documents.
    pub async fn ask(&self, session: &DocumentSession, question: &str) -> Result<String, ChatError> {
        let prompt = self.build_prompt(session, question)?;
        info!(
            provider = %self.client.name(),
            documents = session.count(),
            "Asking LLM about uploaded documents"
        );
        let answer = self.client.complete(&prompt).await?;
        Ok(answer.trim().to_string())
    }
}

impl std::fmt::Debug for FileChat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileChat")
            .field("client", &self.client.name())
            .finish_non_exhaustive()
    }
}
