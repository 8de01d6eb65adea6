//! Natural language to SQL via the LLM.

use std::sync::Arc;

use docchat_chat::{LlmClient, PromptTemplate};
use tracing::{debug, info};

use crate::error::SqlError;

/// Asks the LLM to write a single SQL statement for a question.
pub struct SqlTranslator {
    client: Arc<dyn LlmClient>,
    dialect: String,
    template: PromptTemplate,
}

impl SqlTranslator {
    pub fn new(client: Arc<dyn LlmClient>, dialect: impl Into<String>) -> Self {
        Self {
            client,
            dialect: dialect.into(),
            template: PromptTemplate::sql(),
        }
    }

    /// Translate `question` into SQL, stripped of code fences.
    pub async fn to_sql(&self, question: &str) -> Result<String, SqlError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(SqlError::EmptyQuestion);
        }
        let prompt = self
            .template
            .render(&[("dialect", self.dialect.as_str()), ("question", question)])?;

        info!(
            dialect = %self.dialect,
            provider = %self.client.name(),
            "Translating question to SQL"
        );
        let reply = self.client.complete(&prompt).await?;
        let sql = strip_code_fence(&reply);
        debug!(sql = %sql, "Generated SQL");
        Ok(sql)
    }
}

impl std::fmt::Debug for SqlTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlTranslator")
            .field("client", &self.client.name())
            .field("dialect", &self.dialect)
            .finish()
    }
}

/// Remove a surrounding Markdown code fence (with optional language tag).
pub fn strip_code_fence(reply: &str) -> String {
    let trimmed = reply.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed.to_string();
    };
    // Drop the info string on the opening line, e.g. "sql".
    let body = match body.find('\n') {
        Some(newline) => &body[newline + 1..],
        None => body,
    };
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim().to_string()
}
