//! Error types for ips-core operations.
//!
//! The [`Error`] enum covers the failure modes shared by every operator in
//! the workspace:
//! - Image buffer construction (data length vs. dimensions)
//! - Input/output dimension checks
//! - Operator parameter validation
//! - Defensive bounds checks on neighborhood addressing
//!
//! # Usage
//!
//! ```rust
//! use ips_core::{Error, Result};
//!
//! fn check_gamma(gamma: f64) -> Result<()> {
//!     if !(gamma > 0.0) {
//!         return Err(Error::invalid_parameter("gamma", format!("must be > 0, got {gamma}")));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_gamma(0.0).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or addressing images.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid image dimensions.
    ///
    /// Returned when a data buffer does not match `width * height * 3`, or
    /// when an operation needs a non-empty image (e.g. histogram
    /// normalization of a 0x0 image).
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Image width
        width: u32,
        /// Image height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Two images that must share dimensions do not.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First image width
        a_width: u32,
        /// First image height
        a_height: u32,
        /// Second image width
        b_width: u32,
        /// Second image height
        b_height: u32,
    },

    /// Operator parameter outside its valid domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Pixel coordinates are outside image bounds.
    ///
    /// Border replication keeps every neighborhood read in range, so this
    /// only surfaces if clamped addressing is bypassed.
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfRange {
        /// X coordinate that was out of bounds
        x: i64,
        /// Y coordinate that was out of bounds
        y: i64,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidParameter`] error.
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }
}
