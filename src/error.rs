// src/error.rs

use thiserror::Error;

// "Nothing found" is never an error anywhere in the pipeline; these cover
// the cases where extraction could not run at all.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input text is empty or unparseable")]
    EmptyInput,

    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("failed to read input file")]
    Io(#[from] std::io::Error),

    #[error("PDF text extraction failed: {0}")]
    Pdf(String),
}
