//! Page-ordered text extraction from PDF files.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use thiserror::Error;

// ---------------------------------------------------------------------------
// ExtractError
// ---------------------------------------------------------------------------

/// Errors that can occur while reading text out of a PDF.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a PDF the parser understands.
    #[error("cannot parse PDF: {0}")]
    Parse(String),
}

// ---------------------------------------------------------------------------
// TextExtractor trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe interface for document text extraction.
///
/// Implementations are blocking; the orchestrator runs them on the blocking
/// thread pool.
pub trait TextExtractor: Send + Sync {
    /// Return the text of every page in `path`, concatenated in page order.
    fn extract(&self, path: &Path) -> Result<String, ExtractError>;
}

// ---------------------------------------------------------------------------
// PdfTextExtractor
// ---------------------------------------------------------------------------

/// [`TextExtractor`] backed by `pdf-extract`.
///
/// No OCR and no layout preservation: image-only pages contribute nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
            path: path.display().to_string(),
            source,
        })?;

        // pdf-extract panics on some malformed inputs instead of returning
        // an error; nothing may unwind past this boundary.
        let pages = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(&bytes)
        }))
        .map_err(|payload| ExtractError::Parse(panic_message(payload.as_ref())))?
        .map_err(|e| ExtractError::Parse(e.to_string()))?;

        log::debug!(
            "pdf: extracted {} page(s) from {}",
            pages.len(),
            path.display()
        );

        Ok(pages.concat())
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "parser panicked".to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Build a small but well-formed PDF with one Helvetica text line per
    /// page.  Page texts must not contain `(`, `)` or `\`.
    pub(crate) fn minimal_pdf(pages: &[&str]) -> Vec<u8> {
        let n = pages.len();
        let mut objects: Vec<String> = Vec::new();

        objects.push("<< /Type /Catalog /Pages 2 0 R >>".into());
        let kids: Vec<String> = (0..n).map(|i| format!("{} 0 R", 4 + 2 * i)).collect();
        objects.push(format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            n
        ));
        objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".into());

        for (i, text) in pages.iter().enumerate() {
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                5 + 2 * i
            ));
            let content = format!("BT /F1 24 Tf 72 720 Td ({text}) Tj ET");
            objects.push(format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                content.len(),
                content
            ));
        }

        let mut out = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
        }

        let xref_at = out.len();
        out.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
        out.push_str("0000000000 65535 f \n");
        for off in &offsets {
            out.push_str(&format!("{off:010} 00000 n \n"));
        }
        out.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_at
        ));

        out.into_bytes()
    }

    #[test]
    fn single_page_text_is_extracted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.pdf");
        std::fs::write(&path, minimal_pdf(&["Hello world."])).unwrap();

        let text = PdfTextExtractor::new().extract(&path).unwrap();
        assert!(text.contains("Hello world."), "got {text:?}");
    }

    #[test]
    fn pages_are_concatenated_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("three.pdf");
        std::fs::write(&path, minimal_pdf(&["Alpha page", "Bravo page", "Charlie page"]))
            .unwrap();

        let text = PdfTextExtractor::new().extract(&path).unwrap();

        let a = text.find("Alpha page").expect("first page missing");
        let b = text.find("Bravo page").expect("second page missing");
        let c = text.find("Charlie page").expect("third page missing");
        assert!(a < b && b < c, "pages out of order: {text:?}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = PdfTextExtractor::new()
            .extract(&dir.path().join("absent.pdf"))
            .unwrap_err();
        assert!(matches!(err, ExtractError::Io { .. }));
        assert!(err.to_string().contains("absent.pdf"));
    }

    #[test]
    fn corrupt_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corrupt.pdf");
        std::fs::write(&path, b"this is definitely not a pdf").unwrap();

        let err = PdfTextExtractor::new().extract(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }

    #[test]
    fn panic_message_handles_both_payload_kinds() {
        let s: Box<dyn std::any::Any + Send> = Box::new("static str");
        assert_eq!(panic_message(s.as_ref()), "static str");
        let s: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(s.as_ref()), "owned");
        let s: Box<dyn std::any::Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(s.as_ref()), "parser panicked");
    }
}
