//! Error types for image operations.

use ips_lut::LutError;
use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// The image cannot be processed at its size.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A neighborhood read escaped the image after border clamping.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Error from the core image types.
    #[error(transparent)]
    Core(#[from] ips_core::Error),

    /// Error while building a lookup table.
    ///
    /// Parameter errors from the table builders arrive as
    /// [`OpsError::InvalidParameter`] instead.
    #[error(transparent)]
    Lut(LutError),
}

impl From<LutError> for OpsError {
    fn from(err: LutError) -> Self {
        match err {
            LutError::InvalidParameter(msg) => Self::InvalidParameter(msg),
            other => Self::Lut(other),
        }
    }
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lut_errors_map_to_ops_kinds() {
        let err: OpsError = LutError::InvalidParameter("gamma must be > 0".into()).into();
        assert!(matches!(&err, OpsError::InvalidParameter(m) if m.contains("gamma")));

        let err: OpsError = LutError::EmptyHistogram.into();
        assert!(matches!(err, OpsError::Lut(LutError::EmptyHistogram)));
    }
}
