//! Error types for document reconstruction.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for document reconstruction operations.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("content extraction failed: {0}")]
    Extraction(String),

    #[error("table engine failed: {0}")]
    Engine(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type alias for ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;
