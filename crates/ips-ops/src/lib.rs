//! # ips-ops
//!
//! Image transformation engine for 8-bit BGR images.
//!
//! Two families of pure operators, each taking a [`BgrImage`](ips_core::BgrImage)
//! and returning a new image of the same dimensions:
//!
//! # Modules
//!
//! - [`pixelwise`] - Intensity mappers: tone scale, linear, negative,
//!   gamma, sigmoid, histogram equalization
//! - [`filter`] - Spatial filters: box/weighted smoothing, sharpening,
//!   emboss, edge/Sobel/Prewitt/Roberts gradients, median
//! - [`kernel`] - The fixed 3x3 integer kernels
//! - [`pipeline`] - One optional mapper followed by one optional filter
//! - [`rows`] - Row scheduling (rayon with the `parallel` feature)
//!
//! # Example
//!
//! ```rust
//! use ips_core::BgrImage;
//! use ips_ops::{filter, pixelwise};
//!
//! let src = BgrImage::from_fn(32, 32, |x, y| [(x * 8) as u8, (y * 8) as u8, 64]);
//! let bright = pixelwise::gamma(&src, 0.7)?;
//! let edges = filter::sobel(&bright)?;
//! assert_eq!(edges.dimensions(), (32, 32));
//! # Ok::<(), ips_ops::OpsError>(())
//! ```
//!
//! # Border handling
//!
//! Filters read out-of-image neighbors by clamping each coordinate to the
//! nearest edge. Nothing wraps and nothing is zero-padded.
//!
//! # Feature Flags
//!
//! - `parallel` - Compute output rows on the rayon pool (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod filter;
pub mod kernel;
pub mod pipeline;
pub mod pixelwise;
pub mod rows;

pub use error::{OpsError, OpsResult};
pub use filter::FilterOp;
pub use kernel::Kernel3;
pub use pipeline::Pipeline;
pub use pixelwise::PixelOp;
