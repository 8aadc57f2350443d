//! # ips-core
//!
//! Core types for 8-bit BGR image processing.
//!
//! This crate provides the foundational types used throughout the ips workspace:
//!
//! - [`BgrImage`] - Owned row-major image of interleaved `[B, G, R]` bytes
//! - [`Channel`], [`Bgr`] - Channel addressing in BGR storage order
//! - [`clamp_coord`] - The single clamp-to-edge addressing helper
//! - [`Histogram`] - 256-bin intensity counts and their distributions
//! - [`Error`] - Shared error type
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The other crates build on it:
//!
//! ```text
//! ips-core (this crate)
//!    ^
//!    |
//!    +-- ips-lut (256-entry lookup tables)
//!    +-- ips-ops (pixel-wise mappers, spatial filters)
//!    +-- ips-io  (decode/encode boundary)
//!    +-- ips-cli (the `ips` binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod border;
pub mod error;
pub mod histogram;
pub mod image;
pub mod pixel;

// Re-exports for convenience
pub use border::{clamp_coord, clamped_window};
pub use error::*;
pub use histogram::Histogram;
pub use image::BgrImage;
pub use pixel::{luma_bt601, Bgr, Channel, BT601_LUMA_B, BT601_LUMA_G, BT601_LUMA_R, BT601_SHIFT};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use ips_core::prelude::*;
///
/// let img = BgrImage::new(2, 2);
/// let hist = Histogram::from_channel(&img, Channel::Blue);
/// assert_eq!(hist.count(0), 4);
/// ```
pub mod prelude {
    pub use crate::border::clamp_coord;
    pub use crate::error::{Error, Result};
    pub use crate::histogram::Histogram;
    pub use crate::image::BgrImage;
    pub use crate::pixel::{luma_bt601, Bgr, Channel};
}
