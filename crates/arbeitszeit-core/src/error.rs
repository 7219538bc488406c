use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ArbeitszeitError {
    #[error("input is not a PDF document (missing %PDF- header)")]
    InvalidPdf,

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to load options from {path}: {reason}")]
    OptionsLoad { path: PathBuf, reason: String },

    #[error("invalid options: {0}")]
    OptionsInvalid(String),

    #[error("failed to write spreadsheet: {0}")]
    Xlsx(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rust_xlsxwriter::XlsxError> for ArbeitszeitError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        ArbeitszeitError::Xlsx(e.to_string())
    }
}
