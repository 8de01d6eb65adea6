//! DOCX extractor.
//!
//! A `.docx` file is a ZIP archive; the body lives in `word/document.xml`
//! as WordprocessingML. Paragraphs (`w:p`) are read in document order,
//! including those inside table cells.

use std::io::{Cursor, Read};

use docchat_core::DocumentType;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::ExtractionError;
use crate::ContentExtractor;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts non-blank paragraph text from Word documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl ContentExtractor for DocxExtractor {
    fn document_type(&self) -> DocumentType {
        DocumentType::Docx
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)?
            .read_to_string(&mut xml)
            .map_err(|e| ExtractionError::Docx(e.to_string()))?;

        let paragraphs = paragraphs_from_xml(&xml)?;
        tracing::debug!(paragraphs = paragraphs.len(), "DOCX paragraphs read");

        Ok(paragraphs
            .iter()
            .filter(|p| !p.trim().is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string())
    }
}

/// Collect the text of every paragraph in a WordprocessingML body.
///
/// Runs (`w:t`) are concatenated; `w:tab` becomes a tab and `w:br`/`w:cr`
/// a newline when they appear inside a run. Blank paragraphs are kept so
/// callers decide how to treat them.
///
/// Paragraphs can nest (text boxes hold their own `w:p` inside a run of
/// the enclosing paragraph). Each paragraph gets its slot when it opens,
/// so output follows opening order and an inner paragraph never disturbs
/// the text of the one around it.
pub fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    // Slots of the paragraphs currently open, innermost last.
    let mut open: Vec<usize> = Vec::new();
    let mut run_depth = 0usize;
    let mut text_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => {
                    open.push(paragraphs.len());
                    paragraphs.push(String::new());
                }
                b"r" => run_depth += 1,
                b"t" => text_depth += 1,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" if run_depth > 0 => push_text(&mut paragraphs, &open, "\t"),
                b"br" | b"cr" if run_depth > 0 => push_text(&mut paragraphs, &open, "\n"),
                b"p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(t) if text_depth > 0 => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractionError::Docx(e.to_string()))?;
                push_text(&mut paragraphs, &open, &text);
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => text_depth = text_depth.saturating_sub(1),
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"p" => {
                    open.pop();
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

/// Append to the innermost open paragraph. Text outside any paragraph is dropped.
fn push_text(paragraphs: &mut [String], open: &[usize], text: &str) {
    if let Some(&slot) = open.last() {
        paragraphs[slot].push_str(text);
    }
}
