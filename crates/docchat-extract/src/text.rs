//! Plain text extractor.

use docchat_core::DocumentType;

use crate::error::ExtractionError;
use crate::ContentExtractor;

/// Decodes text files as UTF-8, falling back to Latin-1.
///
/// Latin-1 maps every byte to the code point of the same value, so this
/// extractor never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl ContentExtractor for TextExtractor {
    fn document_type(&self) -> DocumentType {
        DocumentType::Txt
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let text = match std::str::from_utf8(bytes) {
            Ok(text) => text.strip_prefix('\u{feff}').unwrap_or(text).to_string(),
            Err(e) => {
                tracing::debug!(error = %e, "Text is not UTF-8, decoding as Latin-1");
                decode_latin1(bytes)
            }
        };
        Ok(text.trim().to_string())
    }
}

/// Decode ISO-8859-1 bytes.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
