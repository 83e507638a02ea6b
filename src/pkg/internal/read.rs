use std::io::Cursor;
use std::str::FromStr;

use crate::prelude::{EvalError, Result};

/// Which reader strategy to use, derived from the upload's file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Docx,
    Pdf,
}

impl FromStr for DocumentFormat {
    type Err = EvalError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag.to_lowercase().as_str() {
            "docx" => Ok(DocumentFormat::Docx),
            "pdf" => Ok(DocumentFormat::Pdf),
            other => Err(EvalError::UnsupportedFormat(other.to_string())),
        }
    }
}

pub fn extract_document(data: &[u8], format: DocumentFormat) -> Result<String> {
    match format {
        DocumentFormat::Docx => extract_text_from_docx(data),
        DocumentFormat::Pdf => extract_text_from_pdf(data),
    }
}

fn extract_text_from_pdf(data: &[u8]) -> Result<String> {
    use lopdf::Document;
    let cursor = Cursor::new(data);
    let doc = Document::load_from(cursor)
        .map_err(|e| EvalError::MalformedDocument(e.to_string()))?;

    // Page keys come back sorted, which is document order. Pages run
    // together with no separator between them.
    let mut text = String::new();
    for page_num in doc.get_pages().keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => {
                tracing::warn!("failed to extract text from page {}: {}", page_num, e);
            }
        }
    }
    Ok(text)
}

fn extract_text_from_docx(data: &[u8]) -> Result<String> {
    use docx_rs::read_docx;
    let docx = read_docx(data).map_err(|e| EvalError::MalformedDocument(e.to_string()))?;
    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(p) = child {
            let mut line = String::new();
            for child in &p.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for run_child in &run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            line.push_str(&t.text);
                        }
                    }
                }
            }
            // empty paragraphs stay as empty lines
            paragraphs.push(line);
        }
    }
    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_tag_is_case_insensitive() {
        assert_eq!("DOCX".parse::<DocumentFormat>().unwrap(), DocumentFormat::Docx);
        assert_eq!("Pdf".parse::<DocumentFormat>().unwrap(), DocumentFormat::Pdf);
    }

    #[test]
    fn unknown_format_tag_is_rejected() {
        let err = "txt".parse::<DocumentFormat>().unwrap_err();
        assert!(matches!(err, EvalError::UnsupportedFormat(tag) if tag == "txt"));
    }

    #[test]
    fn garbage_bytes_are_a_malformed_document() {
        let err = extract_document(b"not really a zip", DocumentFormat::Docx).unwrap_err();
        assert!(matches!(err, EvalError::MalformedDocument(_)));
        let err = extract_document(b"not really a pdf", DocumentFormat::Pdf).unwrap_err();
        assert!(matches!(err, EvalError::MalformedDocument(_)));
    }

    #[test]
    fn pdf_pages_concatenate_in_document_order() {
        let bytes = crate::pkg::internal::test_support::pdf_bytes(&["Python", "MongoDB"]);
        let text = extract_document(&bytes, DocumentFormat::Pdf).unwrap();
        let first = text.find("Python").expect("first page text");
        let second = text.find("MongoDB").expect("second page text");
        assert!(first < second);
    }

    #[test]
    fn docx_paragraphs_join_with_newlines() {
        let bytes = crate::pkg::internal::test_support::docx_bytes(&["John Doe", "", "Python"]);
        let text = extract_document(&bytes, DocumentFormat::Docx).unwrap();
        assert_eq!(text, "John Doe\n\nPython");
    }
}
