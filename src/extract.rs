// src/extract.rs
//
// Turns an input document into plain text. The parser itself only ever sees
// the text; everything format-specific stays here.

use std::fs;
use std::path::Path;

use crate::error::ParseError;

pub fn extract_text(path: &Path) -> Result<String, ParseError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "txt" | "md" => Ok(fs::read_to_string(path)?),
        "pdf" => pdf_extract::extract_text(path).map_err(|e| ParseError::Pdf(e.to_string())),
        other => Err(ParseError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_plain_text_files() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "Anis Shaikh").unwrap();
        let text = extract_text(file.path()).unwrap();
        assert!(text.contains("Anis Shaikh"));
    }

    #[test]
    fn rejects_unsupported_extensions() {
        let err = extract_text(Path::new("resume.docx")).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedFormat(ref ext) if ext == "docx"));
    }

    #[test]
    fn rejects_missing_extension() {
        assert!(matches!(
            extract_text(Path::new("resume")),
            Err(ParseError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            extract_text(Path::new("definitely/not/here.txt")),
            Err(ParseError::Io(_))
        ));
    }
}
