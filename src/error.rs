//! Error types for the spandown library.

use thiserror::Error;

/// Result type alias for spandown operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during classification and rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// The document contains no extractable text spans.
    ///
    /// Raised by font analysis when every span is whitespace-only (or the
    /// span list is empty). Fatal: the conversion produces no output.
    #[error("No extractable text found in document (scanned or image-only input?)")]
    EmptyDocument,

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}
