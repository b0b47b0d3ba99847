//! Interactive input: asking for the PDF name and normalising it.

use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Prompt text shown before reading the file name.
pub const PROMPT: &str = "Enter the name of the PDF file: ";

/// Write [`PROMPT`] to `output` and read one line from `input`.
///
/// Returns the line without its trailing newline.  End of input is an
/// `UnexpectedEof` error.
pub fn prompt_file_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> std::io::Result<String> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "no file name entered",
        ));
    }
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// Turn a user-typed name into a PDF path.
///
/// Surrounding whitespace is dropped and `.pdf` is appended unless the name
/// already ends with it.  The check is case-sensitive: `report.PDF` becomes
/// `report.PDF.pdf`.
///
/// ```
/// use std::path::PathBuf;
/// use pdf_roundtrip::pipeline::resolve_pdf_path;
///
/// assert_eq!(resolve_pdf_path("notes"), PathBuf::from("notes.pdf"));
/// assert_eq!(resolve_pdf_path("notes.pdf"), PathBuf::from("notes.pdf"));
/// ```
pub fn resolve_pdf_path(name: &str) -> PathBuf {
    let name = name.trim();
    if name.ends_with(".pdf") {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}.pdf"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_is_appended_when_missing() {
        assert_eq!(resolve_pdf_path("notes"), PathBuf::from("notes.pdf"));
        assert_eq!(
            resolve_pdf_path("docs/report"),
            PathBuf::from("docs/report.pdf")
        );
    }

    #[test]
    fn existing_suffix_is_kept() {
        assert_eq!(resolve_pdf_path("notes.pdf"), PathBuf::from("notes.pdf"));
    }

    #[test]
    fn suffix_check_is_case_sensitive() {
        assert_eq!(resolve_pdf_path("a.PDF"), PathBuf::from("a.PDF.pdf"));
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(resolve_pdf_path("  notes \n"), PathBuf::from("notes.pdf"));
    }

    #[test]
    fn prompt_writes_prompt_and_reads_line() {
        let mut input = std::io::Cursor::new(b"notes\r\nignored\n".to_vec());
        let mut output = Vec::new();

        let name = prompt_file_name(&mut input, &mut output).unwrap();

        assert_eq!(name, "notes");
        assert_eq!(output, PROMPT.as_bytes());
    }

    #[test]
    fn prompt_at_eof_is_an_error() {
        let mut input = std::io::Cursor::new(Vec::new());
        let mut output = Vec::new();

        let err = prompt_file_name(&mut input, &mut output).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
