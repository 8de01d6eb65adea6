//! Error types for the document session store.

use docchat_core::error::DocChatError;
use docchat_extract::ExtractionError;

use crate::outcome::Severity;

/// Reasons a session operation did not change the session.
///
/// The display strings are complete user-facing messages.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("File {0} is already uploaded and processed")]
    DuplicateDocument(String),
    #[error("Unsupported file type: {0}. Supported types: PDF, TXT, CSV, DOCX")]
    UnsupportedType(String),
    #[error("Error processing file {name}: {source}")]
    ExtractionFailure {
        name: String,
        source: ExtractionError,
    },
    #[error("No readable content found in {0}. The file might be empty, corrupted, or contain only images.")]
    EmptyContent(String),
    #[error("File {0} not found in uploaded files")]
    NotFound(String),
    #[error("No documents have been uploaded yet. Please upload files first.")]
    EmptySession,
}

impl SessionError {
    /// How a caller should present this error.
    pub fn severity(&self) -> Severity {
        match self {
            SessionError::DuplicateDocument(_) => Severity::Info,
            SessionError::EmptyContent(_) => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl From<SessionError> for DocChatError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::UnsupportedType(tag) => DocChatError::UnsupportedType(tag),
            SessionError::ExtractionFailure { source, .. } => source.into(),
            other => DocChatError::Session(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_display() {
        let err = SessionError::DuplicateDocument("a.txt".to_string());
        assert_eq!(err.to_string(), "File a.txt is already uploaded and processed");

        let err = SessionError::UnsupportedType("xlsx".to_string());
        assert_eq!(
            err.to_string(),
            "Unsupported file type: xlsx. Supported types: PDF, TXT, CSV, DOCX"
        );

        let err = SessionError::EmptyContent("scan.pdf".to_string());
        assert_eq!(
            err.to_string(),
            "No readable content found in scan.pdf. The file might be empty, corrupted, or contain only images."
        );

        let err = SessionError::NotFound("gone.csv".to_string());
        assert_eq!(err.to_string(), "File gone.csv not found in uploaded files");

        let err = SessionError::EmptySession;
        assert_eq!(
            err.to_string(),
            "No documents have been uploaded yet. Please upload files first."
        );
    }

    #[test]
    fn test_extraction_failure_carries_cause() {
        let err = SessionError::ExtractionFailure {
            name: "broken.pdf".to_string(),
            source: ExtractionError::Pdf("invalid file header".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Error processing file broken.pdf: Error reading PDF: invalid file header"
        );
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("invalid file header"));
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(
            SessionError::DuplicateDocument("a".into()).severity(),
            Severity::Info
        );
        assert_eq!(
            SessionError::EmptyContent("a".into()).severity(),
            Severity::Warning
        );
        assert_eq!(SessionError::NotFound("a".into()).severity(), Severity::Error);
        assert_eq!(SessionError::EmptySession.severity(), Severity::Error);
        assert_eq!(
            SessionError::UnsupportedType("x".into()).severity(),
            Severity::Error
        );
    }

    #[test]
    fn test_into_docchat_error() {
        let err: DocChatError = SessionError::UnsupportedType("ppt".into()).into();
        assert!(matches!(err, DocChatError::UnsupportedType(_)));

        let err: DocChatError = SessionError::ExtractionFailure {
            name: "x.csv".into(),
            source: ExtractionError::Csv("bad".into()),
        }
        .into();
        assert!(matches!(err, DocChatError::Extraction(_)));

        let err: DocChatError = SessionError::EmptySession.into();
        assert!(matches!(err, DocChatError::Session(_)));
    }
}
