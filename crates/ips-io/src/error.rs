//! Error types for I/O operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The image could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoded data did not form a valid image.
    #[error(transparent)]
    Core(#[from] ips_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
