//! PDF text extraction.
//!
//! [`TextExtractor`] is the seam the orchestrator depends on;
//! [`PdfTextExtractor`] is the production implementation backed by the
//! `pdf-extract` crate.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use pdf_roundtrip::pdf::{PdfTextExtractor, TextExtractor};
//!
//! let text = PdfTextExtractor::new().extract("notes.pdf".as_ref()).unwrap();
//! println!("{text}");
//! ```

pub mod extract;

pub use extract::{ExtractError, PdfTextExtractor, TextExtractor};
