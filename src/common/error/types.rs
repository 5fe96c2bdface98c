//! Unified error types for paraprops.
use thiserror::Error;

/// Main error type for extraction operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input path is empty or does not exist
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Invalid file format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Stream or part not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Invalid content type
    #[error("Invalid content type: expected {expected}, got {got}")]
    InvalidContentType { expected: String, got: String },

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// A block container that is neither a document body nor a table cell
    #[error("Unsupported traversal target: {0}")]
    UnsupportedContainer(String),

    /// Record rendering error
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
