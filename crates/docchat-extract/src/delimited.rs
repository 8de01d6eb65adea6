//! CSV extractor.
//!
//! Parses the whole table and renders it as an aligned text frame so the
//! complete data set, not a sample, reaches the LLM.

use docchat_core::{DocumentType, TextTable};

use crate::error::ExtractionError;
use crate::ContentExtractor;

/// Renders CSV files as text tables. The first record is the header.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExtractor;

impl ContentExtractor for CsvExtractor {
    fn document_type(&self) -> DocumentType {
        DocumentType::Csv
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let table = parse_table(bytes)?;
        tracing::debug!(
            columns = table.headers.len(),
            rows = table.rows.len(),
            "CSV parsed"
        );
        Ok(table.render_frame())
    }
}

/// Parse CSV bytes into a [`TextTable`].
///
/// Cells that are not valid UTF-8 are decoded lossily. Records whose field
/// count differs from the header are rejected.
pub fn parse_table(bytes: &[u8]) -> Result<TextTable, ExtractionError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .byte_headers()?
        .iter()
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect();

    if headers.is_empty() {
        return Err(ExtractionError::Csv("no columns to parse from file".to_string()));
    }

    let mut table = TextTable::new(headers);
    for record in reader.byte_records() {
        let record = record?;
        table.push_row(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        );
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_table_rendered() {
        let csv = b"name,age\nalice,30\nbob,4\n";
        let text = CsvExtractor.extract(csv).unwrap();
        assert_eq!(text, "    name  age\n0  alice   30\n1    bob    4");
    }

    #[test]
    fn test_header_only_renders_header() {
        let text = CsvExtractor.extract(b"id,title,author\n").unwrap();
        assert_eq!(text, "id  title  author");
    }

    #[test]
    fn test_every_row_included() {
        let mut csv = String::from("n\n");
        for i in 0..500 {
            csv.push_str(&format!("{}\n", i));
        }
        let text = CsvExtractor.extract(csv.as_bytes()).unwrap();
        assert_eq!(text.lines().count(), 501);
        assert!(text.ends_with("499  499"));
    }

    #[test]
    fn test_quoted_fields() {
        let csv = b"city,note\n\"Paris, FR\",\"said \"\"hi\"\"\"\n";
        let table = parse_table(csv).unwrap();
        assert_eq!(table.rows[0], vec!["Paris, FR", "said \"hi\""]);
    }

    #[test]
    fn test_empty_input_has_no_columns() {
        let result = CsvExtractor.extract(b"");
        match result {
            Err(ExtractionError::Csv(msg)) => assert!(msg.contains("no columns")),
            other => panic!("expected CSV error, got {:?}", other),
        }
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = CsvExtractor.extract(b"a,b\n1,2\n3,4,5\n");
        assert!(matches!(result, Err(ExtractionError::Csv(_))));
    }

    #[test]
    fn test_non_utf8_cells_decoded_lossily() {
        let table = parse_table(b"word\ncaf\xe9\n").unwrap();
        assert_eq!(table.rows.len(), 1);
        assert!(table.rows[0][0].starts_with("caf"));
    }
}
