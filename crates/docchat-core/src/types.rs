use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DocChatError;

/// Number of characters kept in a document preview.
pub const PREVIEW_CHARS: usize = 200;

// =============================================================================
// Enums
// =============================================================================

/// Declared format of an uploaded document.
///
/// The tag is supplied by the caller (usually from the file extension) and is
/// trusted; content is never sniffed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    Pdf,
    Txt,
    Csv,
    Docx,
}

impl DocumentType {
    /// All supported types, in display order.
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Pdf,
        DocumentType::Txt,
        DocumentType::Csv,
        DocumentType::Docx,
    ];

    /// Parse a type tag such as `pdf` or `.DOCX`. Case-insensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().trim_start_matches('.');
        Self::ALL
            .into_iter()
            .find(|t| t.extension().eq_ignore_ascii_case(tag))
    }

    /// Lowercase file extension for this type.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentType::Pdf => "pdf",
            DocumentType::Txt => "txt",
            DocumentType::Csv => "csv",
            DocumentType::Docx => "docx",
        }
    }

    /// Uppercase label used in listings and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Pdf => "PDF",
            DocumentType::Txt => "TXT",
            DocumentType::Csv => "CSV",
            DocumentType::Docx => "DOCX",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentType {
    type Err = DocChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| DocChatError::UnsupportedType(s.to_string()))
    }
}

// =============================================================================
// Document records
// =============================================================================

/// A processed document held in a session.
///
/// Created once from extracted text and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Unique key within the session; also the display name.
    pub name: String,
    /// Extracted plain text.
    pub content: String,
    /// Character count of `content`.
    pub size: usize,
    /// First [`PREVIEW_CHARS`] characters, with `...` when truncated.
    pub preview: String,
    /// Which extractor produced `content`.
    pub doc_type: DocumentType,
    pub added_at: DateTime<Utc>,
}

impl DocumentRecord {
    /// Build a record, deriving `size` and `preview` from the content.
    pub fn new(name: impl Into<String>, content: String, doc_type: DocumentType) -> Self {
        let size = content.chars().count();
        let preview = make_preview(&content, size);
        Self {
            name: name.into(),
            content,
            size,
            preview,
            doc_type,
            added_at: Utc::now(),
        }
    }

    /// Metadata view without the content.
    pub fn info(&self) -> DocumentInfo {
        DocumentInfo {
            name: self.name.clone(),
            size: self.size,
            preview: self.preview.clone(),
            doc_type: self.doc_type,
            added_at: self.added_at,
        }
    }
}

fn make_preview(content: &str, size: usize) -> String {
    if size > PREVIEW_CHARS {
        let mut preview: String = content.chars().take(PREVIEW_CHARS).collect();
        preview.push_str("...");
        preview
    } else {
        content.to_string()
    }
}

/// Listing entry for a stored document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub name: String,
    pub size: usize,
    pub preview: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub added_at: DateTime<Utc>,
}

/// Aggregate view of a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total_files: usize,
    pub total_characters: usize,
    /// Distinct types in first-seen order.
    pub file_types: Vec<DocumentType>,
    /// Names in insertion order.
    pub file_names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_case_insensitive() {
        assert_eq!(DocumentType::from_tag("pdf"), Some(DocumentType::Pdf));
        assert_eq!(DocumentType::from_tag("TXT"), Some(DocumentType::Txt));
        assert_eq!(DocumentType::from_tag(".Csv"), Some(DocumentType::Csv));
        assert_eq!(DocumentType::from_tag("docx"), Some(DocumentType::Docx));
    }

    #[test]
    fn test_from_tag_rejects_unknown() {
        assert_eq!(DocumentType::from_tag("doc"), None);
        assert_eq!(DocumentType::from_tag("xlsx"), None);
        assert_eq!(DocumentType::from_tag(""), None);
    }

    #[test]
    fn test_from_str_error_names_tag() {
        let err = "pptx".parse::<DocumentType>().unwrap_err();
        assert!(matches!(err, DocChatError::UnsupportedType(ref t) if t == "pptx"));
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(DocumentType::Docx.to_string(), "DOCX");
        assert_eq!(DocumentType::Pdf.extension(), "pdf");
    }

    #[test]
    fn test_document_type_serde() {
        let json = serde_json::to_string(&DocumentType::Csv).unwrap();
        assert_eq!(json, "\"CSV\"");
        let parsed: DocumentType = serde_json::from_str("\"DOCX\"").unwrap();
        assert_eq!(parsed, DocumentType::Docx);
    }

    #[test]
    fn test_record_short_content_preview_is_whole() {
        let record = DocumentRecord::new("a.txt", "hello".to_string(), DocumentType::Txt);
        assert_eq!(record.size, 5);
        assert_eq!(record.preview, "hello");
    }

    #[test]
    fn test_record_preview_exactly_limit_has_no_ellipsis() {
        let content = "x".repeat(PREVIEW_CHARS);
        let record = DocumentRecord::new("a.txt", content.clone(), DocumentType::Txt);
        assert_eq!(record.size, PREVIEW_CHARS);
        assert_eq!(record.preview, content);
    }

    #[test]
    fn test_record_preview_truncates_with_ellipsis() {
        let content = "y".repeat(PREVIEW_CHARS + 1);
        let record = DocumentRecord::new("a.txt", content, DocumentType::Txt);
        assert_eq!(record.size, PREVIEW_CHARS + 1);
        assert_eq!(record.preview.len(), PREVIEW_CHARS + 3);
        assert!(record.preview.ends_with("y..."));
    }

    #[test]
    fn test_record_counts_characters_not_bytes() {
        let content = "é".repeat(250);
        let record = DocumentRecord::new("accents.txt", content, DocumentType::Txt);
        assert_eq!(record.size, 250);
        assert_eq!(record.preview.chars().count(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_info_omits_content() {
        let record = DocumentRecord::new("a.csv", "a  b".to_string(), DocumentType::Csv);
        let info = record.info();
        assert_eq!(info.name, "a.csv");
        assert_eq!(info.size, 4);
        assert_eq!(info.doc_type, DocumentType::Csv);

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], "CSV");
        assert!(json.get("content").is_none());
    }
}
