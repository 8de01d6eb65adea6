//! PDF extractor.

use std::panic::{catch_unwind, AssertUnwindSafe};

use docchat_core::DocumentType;

use crate::error::ExtractionError;
use crate::ContentExtractor;

/// Extracts the text layer of a PDF, page by page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl ContentExtractor for PdfExtractor {
    fn document_type(&self) -> DocumentType {
        DocumentType::Pdf
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        // pdf-extract panics on some malformed streams instead of returning an error.
        let pages = catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(bytes)
        }))
        .map_err(|_| ExtractionError::Pdf("parser aborted on malformed document".to_string()))?
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

        tracing::debug!(pages = pages.len(), "PDF pages extracted");
        Ok(join_pages(&pages))
    }
}

/// Join page texts in order with single newlines.
///
/// Each page is trimmed first; pdf-extract opens every page with blank
/// lines. Pages without text (image-only scans) contribute nothing, not
/// even a separator.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(|page| page.as_ref().trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_skips_textless_page() {
        let pages = ["First page.", "", "Third page."];
        assert_eq!(join_pages(&pages), "First page.\nThird page.");
    }

    #[test]
    fn test_join_skips_whitespace_page() {
        let pages = ["alpha", " \n\t", "omega"];
        assert_eq!(join_pages(&pages), "alpha\nomega");
    }

    #[test]
    fn test_join_trims_ends() {
        let pages = ["\n\n  intro", "outro  \n"];
        assert_eq!(join_pages(&pages), "intro\noutro");
    }

    #[test]
    fn test_join_all_empty() {
        let pages: [&str; 2] = ["", "   "];
        assert_eq!(join_pages(&pages), "");
        assert_eq!(join_pages::<&str>(&[]), "");
    }

    #[test]
    fn test_join_drops_leading_page_breaks() {
        let pages = ["\n\nPage one text", "", "\n\nPage three text"];
        assert_eq!(join_pages(&pages), "Page one text\nPage three text");
    }

    /// Build a PDF whose pages each draw one line of Helvetica text.
    /// An empty string produces a page with an empty content stream.
    fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
        let page_count = texts.len();
        let font_id = 3 + 2 * page_count;
        let mut objects: Vec<String> = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                (0..page_count)
                    .map(|i| format!("{} 0 R", 3 + i))
                    .collect::<Vec<_>>()
                    .join(" "),
                page_count
            ),
        ];
        for i in 0..page_count {
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 {} 0 R >> >> /Contents {} 0 R >>",
                font_id,
                3 + page_count + i
            ));
        }
        for text in texts {
            let stream = if text.is_empty() {
                String::new()
            } else {
                format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text)
            };
            objects.push(format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                stream.len(),
                stream
            ));
        }
        objects.push(
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
        );

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }
        let xref_start = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        pdf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_start
            )
            .as_bytes(),
        );
        pdf
    }

    #[test]
    fn test_three_pages_with_blank_middle_page() {
        let bytes = pdf_with_pages(&["Page one text", "", "Page three text"]);
        let text = PdfExtractor.extract(&bytes).unwrap();
        assert_eq!(text, "Page one text\nPage three text");
    }

    #[test]
    fn test_consecutive_pages_have_single_separator() {
        let bytes = pdf_with_pages(&["Alpha", "Beta"]);
        let text = PdfExtractor.extract(&bytes).unwrap();
        assert_eq!(text, "Alpha\nBeta");
    }

    #[test]
    fn test_garbage_bytes_are_an_error() {
        let result = PdfExtractor.extract(b"this is not a pdf at all");
        assert!(matches!(result, Err(ExtractionError::Pdf(_))));
    }

    #[test]
    fn test_empty_payload_is_an_error() {
        let result = PdfExtractor.extract(&[]);
        assert!(matches!(result, Err(ExtractionError::Pdf(_))));
    }
}
