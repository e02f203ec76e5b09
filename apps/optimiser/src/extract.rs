//! Text extraction from uploaded resume documents.
//!
//! Supports the closed set of PDF and DOCX. The format is decided from the
//! file extension before any bytes are read, so an unsupported extension
//! fails fast without touching the filesystem contents.

use std::path::Path;

use docx_rs::{read_docx, DocumentChild};

use crate::errors::AppError;

/// Closed enumeration of supported source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Pdf,
    Docx,
}

impl SourceFormat {
    /// Case-insensitive extension sniffing. Anything other than `.pdf` or
    /// `.docx` is rejected.
    pub fn from_file_name(name: &str) -> Result<Self, AppError> {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            Ok(SourceFormat::Pdf)
        } else if lower.ends_with(".docx") {
            Ok(SourceFormat::Docx)
        } else {
            Err(AppError::UnsupportedFormat(name.to_string()))
        }
    }
}

/// An uploaded or on-disk resume: opaque bytes plus a format tag.
/// Created once, consumed once by [`extract_text`].
#[derive(Debug)]
pub struct SourceDocument {
    pub bytes: Vec<u8>,
    pub format: SourceFormat,
}

impl SourceDocument {
    /// Reads a document from a local path. The extension is validated before
    /// the file is opened.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let format = SourceFormat::from_file_name(name)?;
        let bytes = std::fs::read(path)?;
        Ok(Self { bytes, format })
    }

    /// Wraps an in-memory upload (multipart file part).
    pub fn from_upload(file_name: &str, bytes: Vec<u8>) -> Result<Self, AppError> {
        let format = SourceFormat::from_file_name(file_name)?;
        Ok(Self { bytes, format })
    }
}

/// Extracts plain text from a source document.
///
/// PDF pages are concatenated in document order with no reflow; DOCX
/// paragraphs become one line each, in document order. The result is trimmed
/// of leading and trailing whitespace.
pub fn extract_text(document: &SourceDocument) -> Result<String, AppError> {
    let text = match document.format {
        SourceFormat::Pdf => pdf_extract::extract_text_from_mem(&document.bytes)
            .map_err(|e| AppError::Extraction(format!("Failed to extract text from PDF: {e}")))?,
        SourceFormat::Docx => docx_paragraphs(&document.bytes)?.join("\n"),
    };
    Ok(text.trim().to_string())
}

fn docx_paragraphs(bytes: &[u8]) -> Result<Vec<String>, AppError> {
    let docx = read_docx(bytes)
        .map_err(|e| AppError::Extraction(format!("Failed to parse DOCX: {e}")))?;

    let paragraphs = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(p.raw_text()),
            _ => None,
        })
        .collect();

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};

    fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut buf = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut buf).expect("pack docx");
        buf.into_inner()
    }

    #[test]
    fn test_format_from_file_name_case_insensitive() {
        assert_eq!(
            SourceFormat::from_file_name("resume.PDF").unwrap(),
            SourceFormat::Pdf
        );
        assert_eq!(
            SourceFormat::from_file_name("resume.Docx").unwrap(),
            SourceFormat::Docx
        );
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let err = SourceFormat::from_file_name("resume.txt").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_from_path_rejects_unsupported_extension_without_reading() {
        // The file does not exist — the extension check must fire first.
        let err = SourceDocument::from_path(Path::new("/nonexistent/resume.txt")).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_docx_paragraphs_in_order() {
        let doc = SourceDocument {
            bytes: docx_bytes(&["A", "B", "C"]),
            format: SourceFormat::Docx,
        };
        let text = extract_text(&doc).unwrap();
        assert_eq!(text.lines().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_extracted_text_is_trimmed() {
        let doc = SourceDocument {
            bytes: docx_bytes(&["", "Hello", ""]),
            format: SourceFormat::Docx,
        };
        let text = extract_text(&doc).unwrap();
        assert_eq!(text, "Hello");
    }
}
