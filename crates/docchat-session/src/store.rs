//! In-memory document session store.
//!
//! Holds the documents uploaded during one logical user session, in
//! insertion order and keyed by name. The store is single-writer and does
//! no locking; each user session owns its own [`DocumentSession`].

use std::path::Path;

use docchat_core::{DocumentInfo, DocumentRecord, DocumentType, SessionSummary};
use docchat_extract::{read_source, ExtractorRegistry};
use tracing::{debug, info, warn};

use crate::context;
use crate::error::SessionError;

/// Ordered collection of processed documents.
#[derive(Debug, Default)]
pub struct DocumentSession {
    documents: Vec<DocumentRecord>,
    extractors: ExtractorRegistry,
}

impl DocumentSession {
    /// Create an empty session with the standard extractors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session that dispatches to the given extractors.
    pub fn with_extractors(extractors: ExtractorRegistry) -> Self {
        Self {
            documents: Vec::new(),
            extractors,
        }
    }

    /// Extract and store a document from raw bytes.
    ///
    /// `type_tag` is trusted as the document format (`pdf`, `txt`, `csv` or
    /// `docx`, any case). The session is left unchanged on every error.
    pub fn add(
        &mut self,
        name: &str,
        bytes: &[u8],
        type_tag: &str,
    ) -> Result<DocumentInfo, SessionError> {
        self.ensure_absent(name)?;
        let doc_type = self.resolve_type(type_tag)?;
        self.ingest(name, doc_type, bytes)
    }

    /// Extract and store a document from a file on disk.
    ///
    /// The document name is the file name and the type tag its extension.
    /// The file is read into memory before extraction.
    pub fn add_path(&mut self, path: &Path) -> Result<DocumentInfo, SessionError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let tag = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.ensure_absent(&name)?;
        let doc_type = self.resolve_type(&tag)?;
        let bytes = read_source(path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "Failed to read document");
            SessionError::ExtractionFailure {
                name: name.clone(),
                source,
            }
        })?;
        self.ingest(&name, doc_type, &bytes)
    }

    /// Remove a document by exact name.
    pub fn remove(&mut self, name: &str) -> Result<DocumentRecord, SessionError> {
        let index = self
            .position(name)
            .ok_or_else(|| SessionError::NotFound(name.to_string()))?;
        let record = self.documents.remove(index);
        info!(name = %name, remaining = self.documents.len(), "Document removed");
        Ok(record)
    }

    /// Remove every document. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.documents.len();
        self.documents.clear();
        info!(removed, "Session cleared");
        removed
    }

    /// Metadata for every document, in insertion order.
    pub fn list(&self) -> Vec<DocumentInfo> {
        self.documents.iter().map(DocumentRecord::info).collect()
    }

    /// Full record for a document, including its content.
    pub fn get(&self, name: &str) -> Option<&DocumentRecord> {
        self.documents.iter().find(|d| d.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn has_documents(&self) -> bool {
        !self.documents.is_empty()
    }

    pub fn count(&self) -> usize {
        self.documents.len()
    }

    /// Sum of `size` over all documents.
    pub fn total_characters(&self) -> usize {
        self.documents.iter().map(|d| d.size).sum()
    }

    pub fn summary(&self) -> SessionSummary {
        let mut file_types: Vec<DocumentType> = Vec::new();
        for doc in &self.documents {
            if !file_types.contains(&doc.doc_type) {
                file_types.push(doc.doc_type);
            }
        }

        SessionSummary {
            total_files: self.count(),
            total_characters: self.total_characters(),
            file_types,
            file_names: self.documents.iter().map(|d| d.name.clone()).collect(),
        }
    }

    /// Join all documents into one labeled context string for the LLM.
    pub fn assemble_context(&self) -> Result<String, SessionError> {
        context::assemble(&self.documents).ok_or(SessionError::EmptySession)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.documents.iter().position(|d| d.name == name)
    }

    /// Parse a type tag, accepting only types this session can extract.
    fn resolve_type(&self, tag: &str) -> Result<DocumentType, SessionError> {
        DocumentType::from_tag(tag)
            .filter(|doc_type| self.extractors.supports(*doc_type))
            .ok_or_else(|| SessionError::UnsupportedType(tag.to_string()))
    }

    fn ensure_absent(&self, name: &str) -> Result<(), SessionError> {
        if self.contains(name) {
            debug!(name = %name, "Document already in session");
            return Err(SessionError::DuplicateDocument(name.to_string()));
        }
        Ok(())
    }

    fn ingest(
        &mut self,
        name: &str,
        doc_type: DocumentType,
        bytes: &[u8],
    ) -> Result<DocumentInfo, SessionError> {
        let content = self.extractors.extract(doc_type, bytes).map_err(|source| {
            warn!(name = %name, doc_type = %doc_type, error = %source, "Extraction failed");
            SessionError::ExtractionFailure {
                name: name.to_string(),
                source,
            }
        })?;

        if content.trim().is_empty() {
            warn!(name = %name, doc_type = %doc_type, "No readable content");
            return Err(SessionError::EmptyContent(name.to_string()));
        }

        let record = DocumentRecord::new(name, content, doc_type);
        let info = record.info();
        self.documents.push(record);
        info!(
            name = %name,
            doc_type = %doc_type,
            chars = info.size,
            "Document added"
        );
        Ok(info)
    }
}
