//! User-facing results of session operations.
//!
//! Every store operation can be reduced to an [`Outcome`] so a CLI or UI
//! can print it without re-deriving what happened.

use std::fmt;

use docchat_core::DocumentInfo;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// How an outcome should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Single-glyph marker for terminal output.
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Info => "ℹ️",
            Severity::Warning => "⚠️",
            Severity::Error => "❌",
        }
    }
}

/// A rendered result: severity plus a complete message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub severity: Severity,
    pub message: String,
}

impl Outcome {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Outcome of a successful add.
    pub fn added(info: &DocumentInfo) -> Self {
        Self::success(format!(
            "Successfully processed {} ({} characters)",
            info.name, info.size
        ))
    }

    /// Outcome of a successful removal.
    pub fn removed(name: &str) -> Self {
        Self::success(format!("File {} removed successfully", name))
    }

    /// Outcome of clearing the session.
    pub fn cleared() -> Self {
        Self::success("All files cleared from memory")
    }

    pub fn is_success(&self) -> bool {
        self.severity == Severity::Success
    }
}

impl From<SessionError> for Outcome {
    fn from(err: SessionError) -> Self {
        Self::new(err.severity(), err.to_string())
    }
}

impl From<&SessionError> for Outcome {
    fn from(err: &SessionError) -> Self {
        Self::new(err.severity(), err.to_string())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity.marker(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docchat_core::{DocumentRecord, DocumentType};

    #[test]
    fn test_added_message_reports_characters() {
        let record = DocumentRecord::new("notes.txt", "abc".to_string(), DocumentType::Txt);
        let outcome = Outcome::added(&record.info());
        assert!(outcome.is_success());
        assert_eq!(outcome.message, "Successfully processed notes.txt (3 characters)");
    }

    #[test]
    fn test_removed_and_cleared_messages() {
        assert_eq!(
            Outcome::removed("a.pdf").message,
            "File a.pdf removed successfully"
        );
        assert_eq!(Outcome::cleared().message, "All files cleared from memory");
        assert!(Outcome::cleared().is_success());
    }

    #[test]
    fn test_from_error_keeps_severity() {
        let outcome: Outcome = SessionError::DuplicateDocument("a.txt".into()).into();
        assert_eq!(outcome.severity, Severity::Info);
        assert!(!outcome.is_success());
        assert!(outcome.message.contains("already uploaded"));

        let outcome = Outcome::from(&SessionError::EmptyContent("b.pdf".into()));
        assert_eq!(outcome.severity, Severity::Warning);
    }

    #[test]
    fn test_display_prefixes_marker() {
        let outcome = Outcome::new(Severity::Error, "boom");
        assert_eq!(outcome.to_string(), "❌ boom");
        assert_eq!(Outcome::success("ok").to_string(), "✅ ok");
    }

    #[test]
    fn test_outcome_serializes_severity_snake_case() {
        let json = serde_json::to_value(Outcome::new(Severity::Warning, "w")).unwrap();
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["message"], "w");
    }
}
