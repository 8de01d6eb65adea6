//! Error types for content extraction.

use docchat_core::error::DocChatError;
use docchat_core::DocumentType;

/// Errors raised while turning a document payload into text.
///
/// Each variant carries the underlying parser's message.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Error reading PDF: {0}")]
    Pdf(String),
    #[error("Error reading CSV: {0}")]
    Csv(String),
    #[error("Error reading DOCX: {0}")]
    Docx(String),
    #[error("Error reading source: {0}")]
    Io(#[from] std::io::Error),
    #[error("no extractor registered for {0}")]
    Unregistered(DocumentType),
}

impl From<csv::Error> for ExtractionError {
    fn from(err: csv::Error) -> Self {
        ExtractionError::Csv(err.to_string())
    }
}

impl From<zip::result::ZipError> for ExtractionError {
    fn from(err: zip::result::ZipError) -> Self {
        ExtractionError::Docx(err.to_string())
    }
}

impl From<quick_xml::Error> for ExtractionError {
    fn from(err: quick_xml::Error) -> Self {
        ExtractionError::Docx(err.to_string())
    }
}

impl From<ExtractionError> for DocChatError {
    fn from(err: ExtractionError) -> Self {
        DocChatError::Extraction(err.to_string())
    }
}
