//! Prompt templates with `{placeholder}` substitution.

use crate::error::ChatError;

/// Prompt for answering questions from uploaded documents.
pub const DOCUMENT_QA_TEMPLATE: &str = "\
You are a helpful assistant that answers questions based on the provided context from uploaded documents.

CONTEXT FROM UPLOADED DOCUMENTS:
{context}

USER QUESTION:
{question}

INSTRUCTIONS:
- Answer the question based ONLY on the context provided
- Be concise and factual
- If the context doesn't contain relevant information to answer the question, say \"I cannot find this information in the uploaded documents.\"
- Do not make up information or use external knowledge
- If the question is ambiguous, ask for clarification based on the available context

ANSWER:
";

/// Prompt for translating a question into SQL.
pub const SQL_TEMPLATE: &str = "\
You are an expert in writing {dialect} SQL queries. Convert the following natural language question into a correct SQL query.
Return ONLY the SQL code, nothing else.

Question: {question}
";

/// A text template whose `{name}` placeholders are filled at render time.
///
/// Substituted values are inserted verbatim and never re-scanned, so
/// document text containing braces is safe to pass in. Braces that do not
/// wrap an identifier are left as literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn document_qa() -> Self {
        Self::new(DOCUMENT_QA_TEMPLATE)
    }

    pub fn sql() -> Self {
        Self::new(SQL_TEMPLATE)
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut rest = self.template.as_str();
        while let Some((name, after)) = next_placeholder(rest) {
            if let Some(name) = name {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
            rest = after;
        }
        names
    }

    /// Fill every placeholder from `values`.
    ///
    /// Fails if a placeholder has no value. Extra values are ignored.
    pub fn render(&self, values: &[(&str, &str)]) -> Result<String, ChatError> {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let candidate = &rest[open..];
            match placeholder_at(candidate) {
                Some((name, len)) => {
                    let value = values
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| ChatError::MissingPlaceholder(name.to_string()))?;
                    out.push_str(value);
                    rest = &candidate[len..];
                }
                None => {
                    out.push('{');
                    rest = &candidate[1..];
                }
            }
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// If `s` starts with `{ident}`, return the identifier and the match length.
fn placeholder_at(s: &str) -> Option<(&str, usize)> {
    let close = s.find('}')?;
    let name = &s[1..close];
    let is_ident = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_ident.then_some((name, close + 1))
}

/// Advance to the next `{`, reporting a placeholder name when one starts there.
fn next_placeholder(s: &str) -> Option<(Option<&str>, &str)> {
    let open = s.find('{')?;
    let candidate = &s[open..];
    match placeholder_at(candidate) {
        Some((name, len)) => Some((Some(name), &candidate[len..])),
        None => Some((None, &candidate[1..])),
    }
}
