//! DocChat extraction crate - document payloads to plain text.
//!
//! Provides the [`ContentExtractor`] trait, one implementation per
//! [`DocumentType`], and an [`ExtractorRegistry`] that dispatches on the
//! declared type. Extractors work on in-memory bytes; paths are read into
//! bytes at the boundary with [`read_source`].

pub mod delimited;
pub mod docx;
pub mod error;
pub mod pdf;
pub mod text;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use docchat_core::DocumentType;

pub use delimited::CsvExtractor;
pub use docx::DocxExtractor;
pub use error::ExtractionError;
pub use pdf::PdfExtractor;
pub use text::TextExtractor;

/// Converts a document payload of one type into plain text.
///
/// Implementations never classify empty output as a failure; callers decide
/// what to do with text that is blank.
pub trait ContentExtractor: Send + Sync {
    /// The document type this extractor handles.
    fn document_type(&self) -> DocumentType;

    /// Extract text from the raw payload.
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Extractors keyed by document type.
pub struct ExtractorRegistry {
    extractors: HashMap<DocumentType, Box<dyn ContentExtractor>>,
}

impl ExtractorRegistry {
    /// A registry with no extractors.
    pub fn empty() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Register an extractor under its own document type, returning the one
    /// it replaced.
    pub fn register(
        &mut self,
        extractor: Box<dyn ContentExtractor>,
    ) -> Option<Box<dyn ContentExtractor>> {
        self.extractors.insert(extractor.document_type(), extractor)
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, extractor: impl ContentExtractor + 'static) -> Self {
        self.register(Box::new(extractor));
        self
    }

    pub fn supports(&self, doc_type: DocumentType) -> bool {
        self.extractors.contains_key(&doc_type)
    }

    /// Run the extractor registered for `doc_type`.
    pub fn extract(&self, doc_type: DocumentType, bytes: &[u8]) -> Result<String, ExtractionError> {
        let extractor = self
            .extractors
            .get(&doc_type)
            .ok_or(ExtractionError::Unregistered(doc_type))?;
        tracing::debug!(doc_type = %doc_type, bytes = bytes.len(), "Extracting document");
        extractor.extract(bytes)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::empty()
            .with(PdfExtractor)
            .with(TextExtractor)
            .with(CsvExtractor)
            .with(DocxExtractor)
    }
}

impl fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<&DocumentType> = self.extractors.keys().collect();
        types.sort_by_key(|t| t.label());
        f.debug_struct("ExtractorRegistry")
            .field("types", &types)
            .finish()
    }
}

/// Read a file into memory so it can be handed to an extractor.
pub fn read_source(path: &Path) -> Result<Vec<u8>, ExtractionError> {
    Ok(std::fs::read(path)?)
}
