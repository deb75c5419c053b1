//! Error types for pdfcursor library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfcursor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from loading, searching and rendering documents.
///
/// Cursor movement never fails with an error; it reports exhaustion through
/// `None` instead.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document JSON could not be read or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A search pattern failed to compile.
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::InvalidPattern(err.to_string())
    }
}
