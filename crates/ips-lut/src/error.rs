//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while building a lookup table.
#[derive(Debug, Error)]
pub enum LutError {
    /// A curve parameter is outside its domain.
    #[error("invalid LUT parameter: {0}")]
    InvalidParameter(String),

    /// Equalization was asked for a histogram that counted nothing.
    #[error("cannot equalize an empty histogram")]
    EmptyHistogram,
}
