//! End-to-end tests for the session store: upload every supported format,
//! list, summarize, remove, and assemble context.

use std::io::{Cursor, Write};

use docchat_core::DocumentType;
use docchat_session::{DocumentSession, Outcome, SessionError, Severity};

// =============================================================================
// Helpers
// =============================================================================

fn docx_with_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

fn add_outcome(session: &mut DocumentSession, name: &str, bytes: &[u8], tag: &str) -> Outcome {
    match session.add(name, bytes, tag) {
        Ok(info) => Outcome::added(&info),
        Err(e) => e.into(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn test_mixed_format_session() {
    let mut session = DocumentSession::new();

    session.add("readme.txt", b"Project Falcon launches in May.", "txt").unwrap();
    session
        .add("budget.csv", b"item,cost\nrockets,1200\nfuel,300\n", "csv")
        .unwrap();
    session
        .add(
            "memo.docx",
            &docx_with_paragraphs(&["Memo", "", "Launch moved to June."]),
            "docx",
        )
        .unwrap();

    let listing = session.list();
    assert_eq!(listing.len(), 3);
    assert_eq!(listing[1].doc_type, DocumentType::Csv);
    assert_eq!(listing[2].preview, "Memo\nLaunch moved to June.");

    let context = session.assemble_context().unwrap();
    assert!(context.starts_with("--- Document 1: readme.txt ---\nProject Falcon"));
    assert!(context.contains("\n\n--- Document 2: budget.csv ---\n"));
    assert!(context.contains("0  rockets  1200"));
    assert!(context.ends_with("--- Document 3: memo.docx ---\nMemo\nLaunch moved to June."));

    let summary = session.summary();
    assert_eq!(
        summary.file_types,
        vec![DocumentType::Txt, DocumentType::Csv, DocumentType::Docx]
    );
    assert_eq!(summary.total_characters, session.total_characters());
}

#[test]
fn test_outcome_messages_for_each_path() {
    let mut session = DocumentSession::new();

    let ok = add_outcome(&mut session, "a.txt", b"alpha", "txt");
    assert_eq!(ok.severity, Severity::Success);
    assert_eq!(ok.message, "Successfully processed a.txt (5 characters)");

    let dup = add_outcome(&mut session, "a.txt", b"alpha", "txt");
    assert_eq!(dup.severity, Severity::Info);
    assert_eq!(dup.message, "File a.txt is already uploaded and processed");

    let unsupported = add_outcome(&mut session, "b.pptx", b"..", "pptx");
    assert_eq!(unsupported.severity, Severity::Error);
    assert!(unsupported.message.starts_with("Unsupported file type: pptx"));

    let empty = add_outcome(&mut session, "c.txt", b"   ", "txt");
    assert_eq!(empty.severity, Severity::Warning);
    assert!(empty.message.starts_with("No readable content found in c.txt"));

    let broken = add_outcome(&mut session, "d.pdf", b"garbage", "pdf");
    assert_eq!(broken.severity, Severity::Error);
    assert!(broken.message.starts_with("Error processing file d.pdf: Error reading PDF"));

    assert_eq!(session.count(), 1);
}

#[test]
fn test_remove_and_clear_outcomes() {
    let mut session = DocumentSession::new();
    session.add("a.txt", b"alpha", "txt").unwrap();
    session.add("b.txt", b"beta", "txt").unwrap();

    let removed = session
        .remove("a.txt")
        .map(|r| Outcome::removed(&r.name))
        .unwrap();
    assert_eq!(removed.message, "File a.txt removed successfully");

    let missing: Outcome = session.remove("a.txt").unwrap_err().into();
    assert_eq!(missing.message, "File a.txt not found in uploaded files");
    assert_eq!(session.count(), 1);

    session.clear();
    assert!(!session.has_documents());
    let err = session.assemble_context().unwrap_err();
    assert!(matches!(err, SessionError::EmptySession));
}

#[test]
fn test_sessions_are_independent() {
    let mut first = DocumentSession::new();
    let second = DocumentSession::new();
    first.add("private.txt", b"only mine", "txt").unwrap();
    assert_eq!(first.count(), 1);
    assert_eq!(second.count(), 0);
}
